use rust_hof::callable::Callable;
use rust_hof::signature::Signature;
use rust_hof::synthesis::{
    synthesize, synthesize_reduce, EmptyReducePolicy, FnSlot, OperationKind, SynthesisOptions,
};
use rust_hof::types::{DataType, Sequence, Value};
use rust_hof::HofError;

fn ints(values: &[i64]) -> Value {
    Sequence::from_native(values.to_vec()).into()
}

fn add() -> Value {
    Callable::binary(|a: i64, b: i64| a + b).into()
}

fn seedless() -> FnSlot {
    let mut slot = FnSlot::parse("fn(fn(int64, int64) -> int64, [int64]) -> int64").unwrap();
    synthesize_reduce(&mut slot).unwrap();
    slot
}

fn seeded() -> FnSlot {
    let mut slot = FnSlot::parse("fn(fn(int64, int64) -> int64, [int64], int64) -> int64").unwrap();
    synthesize_reduce(&mut slot).unwrap();
    slot
}

#[test]
fn sums_squares_without_seed() {
    let out = seedless().call(&[add(), ints(&[1, 4, 9, 16, 25])]).unwrap();
    assert_eq!(out, Value::Int64(55));
}

#[test]
fn sums_one_to_ten_without_seed() {
    let input: Vec<i64> = (1..=10).collect();
    let out = seedless().call(&[add(), ints(&input)]).unwrap();
    assert_eq!(out, Value::Int64(55));
}

#[test]
fn seed_is_the_initial_accumulator() {
    let input: Vec<i64> = (1..=10).collect();
    let out = seeded().call(&[add(), ints(&input), Value::Int64(45)]).unwrap();
    assert_eq!(out, Value::Int64(100));
}

#[test]
fn seedless_equals_seeded_with_head_over_tail() {
    let sub: Value = Callable::binary(|a: i64, b: i64| a - b).into();
    let input = [20i64, 3, 5, 1];
    let a = seedless().call(&[sub.clone(), ints(&input)]).unwrap();
    let b = seeded()
        .call(&[sub, ints(&input[1..]), Value::Int64(input[0])])
        .unwrap();
    assert_eq!(a, b);
    assert_eq!(a, Value::Int64(11));
}

#[test]
fn fold_is_left_to_right() {
    let mut slot = FnSlot::parse("fn(fn(utf8, int64) -> utf8, [int64], utf8) -> utf8").unwrap();
    synthesize_reduce(&mut slot).unwrap();

    let append = Callable::binary(|acc: String, d: i64| {
        let digit = char::from_digit(d as u32, 10).unwrap_or('?');
        format!("{acc}{digit}")
    });
    let out = slot
        .call(&[append.into(), ints(&[5, 4, 3, 2, 1]), Value::from("")])
        .unwrap();
    assert_eq!(out, Value::from("54321"));
}

#[test]
fn seeded_reduce_over_empty_returns_seed_without_calling_combiner() {
    let sig: Signature = "fn(int64, int64) -> int64".parse().unwrap();
    let never = Callable::new(sig, |_| panic!("combiner must not run"));
    let out = seeded().call(&[never.into(), ints(&[]), Value::Int64(7)]).unwrap();
    assert_eq!(out, Value::Int64(7));
}

#[test]
fn seedless_reduce_of_single_element_returns_it() {
    let out = seedless().call(&[add(), ints(&[42])]).unwrap();
    assert_eq!(out, Value::Int64(42));
}

#[test]
fn seedless_reduce_over_empty_fails_by_default() {
    let err = seedless().call(&[add(), ints(&[])]).unwrap_err();
    assert!(matches!(err, HofError::EmptyReduce));
}

#[test]
fn seedless_reduce_over_empty_can_return_zero_value() {
    let opts = SynthesisOptions {
        empty_reduce: EmptyReducePolicy::ZeroValue,
        ..Default::default()
    };

    let mut ints_slot = FnSlot::parse("fn(fn(int64, int64) -> int64, [int64]) -> int64").unwrap();
    synthesize(OperationKind::Reduce, &mut ints_slot, &opts).unwrap();
    assert_eq!(ints_slot.call(&[add(), ints(&[])]).unwrap(), Value::Int64(0));

    let mut str_slot = FnSlot::parse("fn(fn(utf8, utf8) -> utf8, [utf8]) -> utf8").unwrap();
    synthesize(OperationKind::Reduce, &mut str_slot, &opts).unwrap();
    let concat = Callable::binary(|a: String, b: String| a + &b);
    let empty = Sequence::empty(DataType::Utf8);
    assert_eq!(
        str_slot.call(&[concat.into(), empty.into()]).unwrap(),
        Value::from("")
    );
}

#[test]
fn combiner_failure_propagates() {
    let sig: Signature = "fn(int64, int64) -> int64".parse().unwrap();
    let overflow = Callable::new(sig, |args| {
        let a = args[0].as_int64().unwrap_or_default();
        let b = args[1].as_int64().unwrap_or_default();
        a.checked_mul(b)
            .map(Value::Int64)
            .ok_or_else(|| HofError::user("overflow"))
    });
    let err = seedless()
        .call(&[overflow.into(), ints(&[i64::MAX, 2])])
        .unwrap_err();
    assert!(matches!(err, HofError::UserFunction(_)));
}

#[test]
fn missing_seed_argument_is_a_type_mismatch() {
    let err = seeded().call(&[add(), ints(&[1, 2])]).unwrap_err();
    assert!(matches!(err, HofError::TypeMismatch { .. }));
}

#[test]
fn mismatched_combiner_shape_is_rejected_at_synthesis() {
    let mut slot = FnSlot::parse("fn(fn(int64, utf8) -> int64, [int64], int64) -> int64").unwrap();
    let err = synthesize_reduce(&mut slot).unwrap_err();
    assert!(matches!(err, HofError::ShapeMismatch { .. }));
    assert!(slot.call(&[]).is_err());
}

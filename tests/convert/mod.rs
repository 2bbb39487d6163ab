use rail_result::convert::*;
use rail_result::{ErrorVec, Result};

#[test]
fn std_bridges_preserve_state() {
    let ok: core::result::Result<i32, &str> = Ok(3);
    assert!(from_std(ok).has_val());

    let err: core::result::Result<i32, &str> = Err("fail");
    let rail = from_std(err);
    assert_eq!(*rail.err(), "fail");
    assert_eq!(into_std(rail), Err("fail"));
}

#[test]
fn collect_vals_gathers_all_values() {
    let all = collect_vals((1..=3).map(Result::<i32, &str>::from_val));
    assert_eq!(*all, vec![1, 2, 3]);
}

#[test]
fn collect_vals_returns_first_error() {
    let items = vec![
        Result::<i32, &str>::from_val(1),
        Result::from_err("first"),
        Result::from_err("second"),
    ];
    assert_eq!(*collect_vals(items).err(), "first");
}

#[test]
fn collect_vals_of_nothing_is_empty_value() {
    let empty: Vec<Result<i32, &str>> = Vec::new();
    assert!(collect_vals(empty).is_empty());
}

#[test]
fn partition_results_keeps_input_order() {
    let (vals, errs) = partition_results([
        Result::<i32, &str>::from_err("a"),
        Result::from_val(2),
        Result::from_err("b"),
        Result::from_val(4),
    ]);

    assert_eq!(vals.as_slice(), &[2, 4]);
    assert_eq!(errs.as_slice(), &["a", "b"]);
}

#[test]
fn first_error_folds_gathered_errors() {
    let none: ErrorVec<&str> = ErrorVec::new();
    assert!(first_error(none).has_val());

    let (_, errs) = partition_results([
        Result::<(), &str>::from_err("x"),
        Result::from_err("y"),
    ]);
    assert_eq!(*first_error(errs).err(), "x");
}

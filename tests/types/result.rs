use std::cell::Cell;
use std::rc::Rc;

use rail_result::{BadResultAccess, Error, Result};

#[test]
fn predicates_are_complementary() {
    let samples: [Result<i32, &str>; 4] = [
        Result::from_val(0),
        Result::from_err("a"),
        Result::default(),
        Error::new("b").into(),
    ];

    for r in &samples {
        assert_ne!(r.has_val(), r.has_err());
        assert_eq!(bool::from(r), r.has_val());
        assert_eq!(r.index(), if r.has_val() { 0 } else { 1 });
    }
}

#[test]
fn owned_pointer_round_trip() {
    let r: Result<Box<i32>, Box<str>> = Result::from_val(Box::new(5));
    assert_eq!(**r, 5);
    assert_eq!(*r.into_val(), 5);

    let e: Result<Box<i32>, Box<str>> = Error::new("oom").into();
    assert_eq!(&**e.err(), "oom");
}

#[test]
fn float_round_trip_and_widening() {
    let r: Result<f64, ()> = Result::from_val(2.5_f32);
    assert_eq!(*r, 2.5);

    let truncated = r.map(|x| x as i64);
    assert_eq!(*truncated, 2);
}

#[test]
fn error_payload_is_converted_on_construction() {
    let r: Result<(), String> = Error::new("late").into();
    assert_eq!(r.err(), "late");

    let widened: Result<(), i64> = Result::from_err(-3_i8);
    assert_eq!(*widened.err(), -3);
}

#[test]
fn default_selects_value_alternative() {
    let r: Result<String, i32> = Result::default();
    assert!(r.has_val());
    assert!(r.is_empty());
}

#[test]
fn assignment_flips_alternatives() {
    let mut r: Result<i32, &str> = Result::from_val(1);

    r.assign(Error::new("gone"));
    assert!(r.has_err());
    assert_eq!(*r.err(), "gone");

    r.assign(Result::<i32, &str>::from_val(100));
    assert!(r.has_val());
    assert_eq!(*r, 100);

    r.set_err("again");
    assert!(r.has_err());

    r.set_val(7);
    assert_eq!(*r, 7);

    r.set_error(Error::new("wrapped"));
    assert_eq!(*r.err(), "wrapped");
}

#[test]
fn assigning_a_copy_of_itself_is_stable() {
    let mut r: Result<String, i32> = Result::from_val("same");
    let snapshot = r.clone();
    r.assign(snapshot);
    assert_eq!(r.val(), "same");
}

#[test]
fn assignment_drops_previous_payload() {
    let tracker = Rc::new(());
    let mut r: Result<Rc<()>, Rc<()>> = Result::from_val(Rc::clone(&tracker));
    assert_eq!(Rc::strong_count(&tracker), 2);

    r.set_val(Rc::new(()));
    assert_eq!(Rc::strong_count(&tracker), 1);

    r.set_err(Rc::clone(&tracker));
    assert_eq!(Rc::strong_count(&tracker), 2);

    drop(r);
    assert_eq!(Rc::strong_count(&tracker), 1);
}

#[test]
fn mutable_access_updates_in_place() {
    let mut r: Result<Vec<i32>, ()> = Result::from_val(vec![1]);
    r.val_mut().push(2);
    r.push(3);
    assert_eq!(*r, vec![1, 2, 3]);

    let mut e: Result<(), String> = Result::from_err("x");
    e.err_mut().push('y');
    assert_eq!(e.into_err(), "xy");
}

#[test]
fn try_accessors_report_missing_alternative() {
    let mut ok: Result<i32, &str> = Result::from_val(1);
    let mut bad: Result<i32, &str> = Result::from_err("no");

    assert_eq!(ok.try_val(), Ok(&1));
    assert_eq!(ok.try_err(), Err(BadResultAccess::MissingError));
    assert_eq!(bad.try_val(), Err(BadResultAccess::MissingValue));
    assert_eq!(bad.try_err(), Ok(&"no"));

    assert!(ok.try_val_mut().is_ok());
    assert!(bad.try_val_mut().is_err());
    assert!(ok.try_err_mut().is_err());
    assert!(bad.try_err_mut().is_ok());

    assert_eq!(ok.try_into_err(), Err(BadResultAccess::MissingError));
    assert_eq!(bad.try_into_val(), Err(BadResultAccess::MissingValue));
}

#[test]
fn bad_access_has_readable_text() {
    assert_eq!(BadResultAccess::MissingValue.to_string(), "missing value");
    assert_eq!(BadResultAccess::MissingError.to_string(), "missing error");
}

#[test]
#[should_panic(expected = "bad result access: missing value")]
fn deref_on_error_panics() {
    let r: Result<i32, &str> = Result::from_err("offline");
    let v: i32 = *r;
    let _ = v;
}

#[test]
#[should_panic(expected = "bad result access: missing value")]
fn into_val_on_error_panics() {
    let r: Result<String, &str> = Result::from_err("offline");
    let _ = r.into_val();
}

#[test]
#[should_panic(expected = "bad result access: missing error")]
fn err_on_value_panics() {
    let r: Result<i32, &str> = Result::from_val(3);
    let _ = r.err();
}

#[test]
#[should_panic(expected = "bad result access: missing error")]
fn into_err_on_value_panics() {
    let r: Result<i32, String> = Result::from_val(3);
    let _ = r.into_err();
}

#[test]
fn views_and_options() {
    let r: Result<String, i32> = Result::from_val("v");
    assert_eq!(r.as_ref().map(|s| s.len()).into_val(), 1);
    assert_eq!(r.clone().ok(), Some("v".to_string()));
    assert_eq!(r.clone().err_opt(), None);

    let mut e: Result<String, i32> = Result::from_err(4);
    if let Result::Err(code) = e.as_mut() {
        *code += 1;
    }
    assert_eq!(e.err_opt(), Some(5));
}

#[test]
fn std_conversions_keep_alternative() {
    let ok: Result<i32, &str> = Ok(1).into();
    assert_eq!(*ok, 1);

    let err: Result<i32, &str> = Err("e").into();
    assert_eq!(*err.err(), "e");

    let back: core::result::Result<i32, &str> = err.into();
    assert_eq!(back, Err("e"));
    assert_eq!(ok.into_std(), Ok(1));
}

#[test]
fn swap_exchanges_whole_state() {
    let mut a: Result<i32, &str> = Result::from_val(1);
    let mut b: Result<i32, &str> = Result::from_err("b");

    a.swap(&mut b);

    assert_eq!(*a.err(), "b");
    assert_eq!(*b, 1);
}

#[test]
fn iteration_yields_only_values() {
    let ok: Result<i32, &str> = Result::from_val(9);
    let bad: Result<i32, &str> = Result::from_err("x");

    assert_eq!(ok.iter().copied().collect::<Vec<_>>(), vec![9]);
    assert_eq!((&bad).into_iter().count(), 0);
    assert_eq!(ok.into_iter().sum::<i32>(), 9);
}

#[test]
fn mutable_iteration_rewrites_value_in_place() {
    let mut ok: Result<i32, &str> = Result::from_val(9);
    let mut bad: Result<i32, &str> = Result::from_err("x");

    for v in &mut ok {
        *v *= 2;
    }
    ok.iter_mut().for_each(|v| *v += 1);
    assert_eq!(*ok, 19);

    assert_eq!((&mut bad).into_iter().count(), 0);
    assert_eq!(bad.iter_mut().count(), 0);
    assert_eq!(*bad.err(), "x");
}

#[test]
fn collect_stops_at_first_error() {
    let pulled = Cell::new(0);
    let items: Vec<Result<i32, &str>> =
        vec![Result::from_val(1), Result::from_err("stop"), Result::from_val(3)];

    let collected: Result<Vec<i32>, &str> =
        items.into_iter().inspect(|_| pulled.set(pulled.get() + 1)).collect();

    assert_eq!(*collected.err(), "stop");
    assert_eq!(pulled.get(), 2);
}

//! Console check runner for the sorted list.
//!
//! Drives the public SortedList API through a fixed set of scenarios and
//! reports each group on stdout. Exits non-zero on the first failed check.
//!
//! Log output is controlled through `RUST_LOG` (default `info`).

use std::fmt::Debug;
use std::process::ExitCode;

use sorted_list::{Element, ElementKind, SortedList, SortedListError};
use thiserror::Error;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Error)]
enum CheckError {
    #[error("Assertion failed: {0}")]
    Assertion(String),

    #[error("Unexpected error: {0}")]
    List(#[from] SortedListError),
}

type CheckResult = Result<(), CheckError>;

fn ensure(condition: bool, message: &str) -> CheckResult {
    if condition {
        Ok(())
    } else {
        Err(CheckError::Assertion(message.to_string()))
    }
}

fn ensure_eq<T: PartialEq + Debug>(expected: T, actual: T, message: &str) -> CheckResult {
    if expected == actual {
        Ok(())
    } else {
        Err(CheckError::Assertion(format!(
            "Expected {:?}, got {:?}. {}",
            expected, actual, message
        )))
    }
}

fn ensure_type_mismatch<T: Debug>(result: Result<T, SortedListError>) -> CheckResult {
    match result {
        Err(SortedListError::TypeMismatch { .. }) => Ok(()),
        other => Err(CheckError::Assertion(format!(
            "Expected a type mismatch, got {:?}",
            other
        ))),
    }
}

fn check_integer_happy_path() -> CheckResult {
    println!("\nTesting Integer List Happy Path:");

    let mut list = SortedList::new(ElementKind::Integer);
    ensure(list.is_empty(), "List should be empty initially")?;
    ensure_eq(0, list.len(), "Initial size should be 0")?;

    list.insert(5)?;
    list.insert(2)?;
    list.insert(8)?;

    ensure_eq(3, list.len(), "Size should be 3 after insertions")?;
    ensure(list.contains(5), "List should contain 5")?;
    ensure(list.contains(2), "List should contain 2")?;
    ensure(!list.contains(3), "List should not contain 3")?;
    ensure_eq(
        "SortedList([2, 5, 8])",
        list.to_string().as_str(),
        "List should be properly sorted",
    )?;

    println!("+ Integer list happy path tests passed");
    Ok(())
}

fn check_string_happy_path() -> CheckResult {
    println!("\nTesting String List Happy Path:");

    let mut list = SortedList::with_values(ElementKind::String, ["b", "a", "c"])?;
    ensure(!list.is_empty(), "List should not be empty")?;
    ensure_eq(3, list.len(), "Initial size should be 3")?;
    ensure_eq(
        "SortedList([a, b, c])",
        list.to_string().as_str(),
        "List should be properly sorted",
    )?;

    list.insert("d")?;
    ensure_eq(
        "SortedList([a, b, c, d])",
        list.to_string().as_str(),
        "List should maintain order after insertion",
    )?;

    println!("+ String list happy path tests passed");
    Ok(())
}

fn check_empty_list() -> CheckResult {
    println!("\nTesting Empty List:");

    let list = SortedList::new(ElementKind::Integer);
    ensure(list.is_empty(), "New list should be empty")?;
    ensure_eq(0, list.len(), "New list size should be 0")?;
    ensure_eq(
        ElementKind::Integer,
        list.kind(),
        "List kind should be integer",
    )?;
    ensure_eq(
        "SortedList([])",
        list.to_string().as_str(),
        "Empty list string representation",
    )?;

    println!("+ Empty list tests passed");
    Ok(())
}

fn check_type_safety() -> CheckResult {
    println!("\nTesting Type Safety:");

    let mut int_list = SortedList::new(ElementKind::Integer);
    let mut str_list = SortedList::new(ElementKind::String);

    ensure_type_mismatch(int_list.insert("not an integer"))?;
    ensure_type_mismatch(str_list.insert(42))?;
    ensure_type_mismatch(SortedList::with_values(
        ElementKind::Integer,
        ["not an integer"],
    ))?;
    ensure_type_mismatch(SortedList::with_values(ElementKind::String, [1]))?;

    println!("+ Type safety tests passed");
    Ok(())
}

fn check_remove_operations() -> CheckResult {
    println!("\nTesting Remove Operations:");

    let mut list = SortedList::with_values(ElementKind::Integer, [1, 2, 2, 3, 4])?;

    list.remove_all(2);
    ensure_eq(
        "SortedList([1, 3, 4])",
        list.to_string().as_str(),
        "remove_all should remove all occurrences",
    )?;

    let removed = list.remove_by_index(1)?;
    ensure_eq(
        Element::from(3),
        removed,
        "remove_by_index should return the removed value",
    )?;
    ensure_eq(
        "SortedList([1, 4])",
        list.to_string().as_str(),
        "remove_by_index should remove element at specified index",
    )?;

    ensure(
        matches!(
            list.remove_by_index(10),
            Err(SortedListError::IndexOutOfBounds { .. })
        ),
        "remove_by_index past the end should fail",
    )?;

    println!("+ Remove operations tests passed");
    Ok(())
}

fn run_checks() -> CheckResult {
    check_integer_happy_path()?;
    check_string_happy_path()?;
    check_empty_list()?;
    check_type_safety()?;
    check_remove_operations()
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("Running sorted list checks");

    match run_checks() {
        Ok(()) => {
            println!("\nAll tests passed successfully!");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(%err, "check failed");
            println!("\nTest failed: {}", err);
            ExitCode::FAILURE
        }
    }
}

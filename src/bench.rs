//! Timing harness and the list vs `Vec` comparison
//!
//!     [`measure`] wraps any closure, records its wall-clock time and hands the
//!     closure's result back untouched. [`compare_with_vec`] uses it to build
//!     and drain a [`SimpleLinkedList`] and a `Vec` of the same size.

use std::fmt;
use std::time::{Duration, Instant};

use serde::{Serialize, Serializer};
use tracing::info;

use crate::list::{ListError, SimpleLinkedList};

/// Elapsed wall-clock time of one labelled call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Measurement {
    pub label: String,
    #[serde(rename = "seconds", serialize_with = "serialize_secs")]
    pub elapsed: Duration,
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Execution time of {}: {:.6} seconds",
            self.label,
            self.elapsed.as_secs_f64()
        )
    }
}

fn serialize_secs<S: Serializer>(elapsed: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(elapsed.as_secs_f64())
}

/// A closure's result together with how long it took.
#[derive(Debug)]
pub struct Measured<R> {
    pub measurement: Measurement,
    pub value: R,
}

/// Run `f` once and time it.
pub fn measure<R>(label: &str, f: impl FnOnce() -> R) -> Measured<R> {
    let start = Instant::now();
    let value = f();
    let elapsed = start.elapsed();
    info!(
        label,
        seconds = elapsed.as_secs_f64(),
        "measured execution time"
    );
    Measured {
        measurement: Measurement {
            label: label.to_string(),
            elapsed,
        },
        value,
    }
}

/// Run `f`, report its elapsed time and return its result unchanged.
pub fn measure_execution_time<R>(label: &str, f: impl FnOnce() -> R) -> R {
    measure(label, f).value
}

/// Timings for both containers at one size.
#[derive(Debug, Clone, Serialize)]
pub struct Comparison {
    pub elements: usize,
    pub linked_list: Vec<Measurement>,
    pub vec: Vec<Measurement>,
}

impl Comparison {
    pub fn get(&self, label: &str) -> Option<&Measurement> {
        self.linked_list
            .iter()
            .chain(self.vec.iter())
            .find(|measurement| measurement.label == label)
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Test for Simple Linked List ({} elements)", self.elements)?;
        for measurement in &self.linked_list {
            writeln!(f, "{}", measurement)?;
        }
        writeln!(f)?;
        writeln!(f, "Test for Vec ({} elements)", self.elements)?;
        for measurement in &self.vec {
            writeln!(f, "{}", measurement)?;
        }
        Ok(())
    }
}

/// Push `0..elements` into each container, then remove every element again.
///
/// The list is drained from the head, the `Vec` from the back, each being the
/// cheap end for its container.
pub fn compare_with_vec(elements: usize) -> Result<Comparison, ListError> {
    let created = measure("create_linked_list", || create_linked_list(elements));
    let mut list = created.value?;
    let drained = measure("drain_linked_list", || drain_linked_list(&mut list));
    drained.value?;

    let created_vec = measure("create_vec", || create_vec(elements));
    let mut vec = created_vec.value;
    let drained_vec = measure("drain_vec", || drain_vec(&mut vec));

    Ok(Comparison {
        elements,
        linked_list: vec![created.measurement, drained.measurement],
        vec: vec![created_vec.measurement, drained_vec.measurement],
    })
}

fn create_linked_list(elements: usize) -> Result<SimpleLinkedList<usize>, ListError> {
    let mut list = SimpleLinkedList::new();
    for value in 0..elements {
        list.push(value)?;
    }
    Ok(list)
}

fn drain_linked_list(list: &mut SimpleLinkedList<usize>) -> Result<(), ListError> {
    for _ in 0..list.len() {
        list.remove_default()?;
    }
    Ok(())
}

fn create_vec(elements: usize) -> Vec<usize> {
    let mut vec = Vec::new();
    for value in 0..elements {
        vec.push(value);
    }
    vec
}

fn drain_vec(vec: &mut Vec<usize>) {
    for _ in 0..vec.len() {
        vec.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measure_returns_result_unchanged() {
        let measured = measure("answer", || 42);
        assert_eq!(measured.value, 42);
        assert_eq!(measured.measurement.label, "answer");
        assert_eq!(measure_execution_time("answer", || "same"), "same");
    }

    #[test]
    fn comparison_drains_both_containers() {
        let comparison = compare_with_vec(50).unwrap();
        assert_eq!(comparison.elements, 50);
        for label in ["create_linked_list", "drain_linked_list", "create_vec", "drain_vec"] {
            assert!(comparison.get(label).is_some(), "missing {}", label);
        }
    }

    #[test]
    fn measurement_display_has_six_decimals() {
        let measurement = Measurement {
            label: "create_vec".to_string(),
            elapsed: Duration::from_micros(1500),
        };
        assert_eq!(
            measurement.to_string(),
            "Execution time of create_vec: 0.001500 seconds"
        );
    }

    #[test]
    fn comparison_serializes_seconds() {
        let comparison = Comparison {
            elements: 1,
            linked_list: vec![Measurement {
                label: "create_linked_list".to_string(),
                elapsed: Duration::from_millis(500),
            }],
            vec: vec![],
        };
        let json = serde_json::to_value(&comparison).unwrap();
        assert_eq!(json["linked_list"][0]["seconds"], 0.5);
        assert_eq!(json["linked_list"][0]["label"], "create_linked_list");
    }
}

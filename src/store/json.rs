//! Dynamic destinations backed by `serde_json::Value`.
//!
//! Arrays behave as sequences and objects as associative containers. An
//! object only accepts pair-shaped values (`{"key": <string>, "value": ..}`);
//! anything else written into it, and any write into a scalar, is a shape
//! violation.

use super::accumulator::{Accumulator, GroupAccumulator, MergePolicy};
use crate::error::{CollectionError, Result};
use crate::source::{not_a_container, value_kind, Pair};
use serde_json::{Map, Value};

/// Store a produced value into a dynamic destination using an explicit
/// merge policy for existing keys.
///
/// Arrays append regardless of the policy. On an object, `Upsert` overwrites,
/// `AppendGroup` always builds an array group, and `MergeSequences`
/// concatenates only when both the old and new values are arrays.
pub fn store_with(policy: MergePolicy, dest: &mut Value, value: Value) -> Result<()> {
    match dest {
        Value::Array(items) => {
            items.push(value);
            Ok(())
        }
        Value::Object(fields) => {
            let pair = Pair::from_value(value)?;
            merge_slot(policy, fields, pair.key, pair.value)
        }
        other => Err(not_a_container(other)),
    }
}

fn merge_slot(
    policy: MergePolicy,
    fields: &mut Map<String, Value>,
    key: String,
    value: Value,
) -> Result<()> {
    match policy {
        MergePolicy::Upsert => {
            fields.insert(key, value);
            Ok(())
        }
        MergePolicy::MergeSequences => {
            let slot = fields.entry(key).or_insert(Value::Null);
            match (slot, value) {
                (Value::Array(existing), Value::Array(items)) => existing.extend(items),
                (slot, value) => *slot = value,
            }
            Ok(())
        }
        MergePolicy::AppendGroup => {
            let items = match value {
                Value::Array(items) => items,
                single => vec![single],
            };
            match fields.get_mut(&key) {
                None => {
                    fields.insert(key, Value::Array(items));
                    Ok(())
                }
                Some(Value::Array(existing)) => {
                    existing.extend(items);
                    Ok(())
                }
                Some(other) => Err(CollectionError::shape_violation(format!(
                    "cannot append a group under key '{}': existing value is {}",
                    key,
                    value_kind(other)
                ))),
            }
        }
    }
}

impl Accumulator<Value> for Value {
    fn store(&mut self, value: Value) -> Result<()> {
        store_with(MergePolicy::Upsert, self, value)
    }
}

impl Accumulator<Pair<String, Value>> for Map<String, Value> {
    fn store(&mut self, pair: Pair<String, Value>) -> Result<()> {
        self.insert(pair.key, pair.value);
        Ok(())
    }
}

impl GroupAccumulator<String, Value> for Value {
    fn append_group(&mut self, key: String, items: Vec<Value>) -> Result<()> {
        match self {
            Value::Object(fields) => {
                merge_slot(MergePolicy::AppendGroup, fields, key, Value::Array(items))
            }
            Value::Array(entries) => {
                entries.push(Pair::new(key, Value::Array(items)).into_value());
                Ok(())
            }
            other => Err(not_a_container(other)),
        }
    }
}

impl GroupAccumulator<String, Value> for Map<String, Value> {
    fn append_group(&mut self, key: String, items: Vec<Value>) -> Result<()> {
        merge_slot(MergePolicy::AppendGroup, self, key, Value::Array(items))
    }
}

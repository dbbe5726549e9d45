use crate::models::{Book, FieldValue, FilterField, GroupKey};
use std::cmp::Ordering;
use std::collections::HashMap;

/// Records that expose their fields to the grouping engine
pub trait Groupable {
    fn field_value(&self, field: FilterField) -> FieldValue;
}

impl Groupable for Book {
    fn field_value(&self, field: FilterField) -> FieldValue {
        match field {
            FilterField::PublicationYear => FieldValue::Scalar(GroupKey::from(self.publication_year)),
            FilterField::Authors => FieldValue::List(
                self.authors
                    .iter()
                    .map(|author| GroupKey::Text(author.clone()))
                    .collect(),
            ),
            FilterField::Rating => FieldValue::Scalar(GroupKey::Number(self.rating)),
            FilterField::Name => FieldValue::Scalar(GroupKey::Text(self.name.clone())),
        }
    }
}

/// Records sharing one grouping key, in input order
#[derive(Debug, Clone, PartialEq)]
pub struct Bucket<T> {
    pub key: GroupKey,
    pub items: Vec<T>,
}

/// Group items by a field.
///
/// When the field is list-valued on the first item every item is filed once
/// per element of its list and buckets come back in ascending key order.
/// Otherwise every item lands in exactly one bucket and buckets come back in
/// descending numeric key order. Keys that do not coerce to a number sort
/// after all numeric keys, keeping first-seen order.
pub fn group_by<T: Groupable + Clone>(field: FilterField, items: &[T]) -> Vec<Bucket<T>> {
    let fan_out = items
        .first()
        .map(|first| first.field_value(field).is_list())
        .unwrap_or(false);

    if fan_out {
        group_by_list(field, items)
    } else {
        group_by_scalar(field, items)
    }
}

/// Keys of grouped buckets, in bucket order
pub fn bucket_keys<T>(buckets: &[Bucket<T>]) -> Vec<&GroupKey> {
    buckets.iter().map(|bucket| &bucket.key).collect()
}

fn group_by_scalar<T: Groupable + Clone>(field: FilterField, items: &[T]) -> Vec<Bucket<T>> {
    let mut groups = BucketBuilder::default();

    for item in items {
        let key = match item.field_value(field) {
            FieldValue::Scalar(key) => key,
            // A list on the scalar path is filed under its joined text
            FieldValue::List(keys) => GroupKey::Text(
                keys.iter()
                    .map(GroupKey::sort_text)
                    .collect::<Vec<_>>()
                    .join(","),
            ),
        };
        groups.push(key, item.clone());
    }

    let mut buckets = groups.finish();
    buckets.sort_by(|a, b| compare_numeric_descending(a.key.as_number(), b.key.as_number()));
    buckets
}

fn group_by_list<T: Groupable + Clone>(field: FilterField, items: &[T]) -> Vec<Bucket<T>> {
    let mut groups = BucketBuilder::default();

    for item in items {
        match item.field_value(field) {
            FieldValue::List(keys) => {
                for key in keys {
                    groups.push(key, item.clone());
                }
            }
            FieldValue::Scalar(key) => groups.push(key, item.clone()),
        }
    }

    let mut buckets = groups.finish();
    buckets.sort_by_cached_key(|bucket| bucket.key.sort_text().encode_utf16().collect::<Vec<u16>>());
    buckets
}

fn compare_numeric_descending(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (true, true) => Ordering::Equal,
    }
}

/// Insertion-ordered bucket accumulator
struct BucketBuilder<T> {
    index: HashMap<GroupKey, usize>,
    buckets: Vec<Bucket<T>>,
}

impl<T> Default for BucketBuilder<T> {
    fn default() -> Self {
        Self {
            index: HashMap::new(),
            buckets: Vec::new(),
        }
    }
}

impl<T> BucketBuilder<T> {
    fn push(&mut self, key: GroupKey, item: T) {
        match self.index.get(&key) {
            Some(&position) => self.buckets[position].items.push(item),
            None => {
                self.index.insert(key.clone(), self.buckets.len());
                self.buckets.push(Bucket {
                    key,
                    items: vec![item],
                });
            }
        }
    }

    fn finish(self) -> Vec<Bucket<T>> {
        self.buckets
    }
}

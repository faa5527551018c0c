//! A finite set of typed, keyed elements and the algebra over it.
//!
//! `Set` is a `HashMap` from a stable string `Key` to an immutable
//! `Element`, enforcing that every element in a given set shares the same
//! `ElementType`.

use std::collections::HashMap;
use std::fmt::{self, Display};

use crate::error::MatroidError;

/// A short, stable label distinguishing families of elements (e.g.
/// `"VECTOR"`, `"ARC"`, `"VERTEX"`). Two sets can only be combined with
/// `union`/`intersect`/`difference`/`symmetric_difference` if their
/// `ElementType`s match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementType(String);

impl ElementType {
    pub fn new(label: impl Into<String>) -> Self {
        ElementType(label.into())
    }
}

impl Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ElementType {
    fn from(label: &str) -> Self {
        ElementType::new(label)
    }
}

/// An opaque payload carried by an [`Element`]. Elements only ever need one
/// of two concrete shapes of value: a real vector for the linear matroid,
/// or a bare tag for elements whose identity is exhausted by their `Key`.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// No payload beyond the key itself (uniform/partition ground sets).
    Tag,
    /// A real coordinate vector (linear matroid elements).
    Vector(Vec<f64>),
}

/// An immutable element of a [`Set`].
///
/// Equality between elements is equality of `Key`; two elements with equal
/// `Key` are interchangeable, so `Element` derives `PartialEq`/`Eq`/`Hash`
/// from the key alone.
#[derive(Debug, Clone)]
pub struct Element {
    element_type: ElementType,
    key: String,
    value: Value,
    weight: f64,
}

impl Element {
    pub fn new(element_type: ElementType, key: impl Into<String>, value: Value, weight: f64) -> Self {
        Element {
            element_type,
            key: key.into(),
            value,
            weight,
        }
    }

    /// An unweighted, tag-only element, the common case for uniform and
    /// partition matroid ground sets.
    pub fn tagged(element_type: ElementType, key: impl Into<String>) -> Self {
        Element::new(element_type, key, Value::Tag, 0.0)
    }

    pub fn element_type(&self) -> &ElementType {
        &self.element_type
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }
}

impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Element {}

impl std::hash::Hash for Element {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key)
    }
}

/// A finite, type-homogeneous collection of [`Element`]s keyed by `Key`.
///
/// Invariants:
/// 1. All elements in a set share the set's `ElementType`.
/// 2. Keys are unique within a set.
/// 3. Union/intersect/difference/symmetric-difference fail on a type
///    mismatch; equality/subset tests do not check the type.
/// 4. Cardinality equals the number of distinct keys held.
#[derive(Debug, Clone)]
pub struct Set {
    content: HashMap<String, Element>,
    element_type: ElementType,
}

impl Set {
    /// Creates an empty set of the given type.
    pub fn empty(element_type: ElementType) -> Self {
        Set {
            content: HashMap::new(),
            element_type,
        }
    }

    /// Creates a set from an initial batch of elements, all of which must
    /// carry `element_type`.
    ///
    /// ```
    /// use matroid_intersection::set::{Element, ElementType, Set};
    ///
    /// let t = ElementType::new("VERTEX");
    /// let set = Set::new(
    ///     t.clone(),
    ///     [Element::tagged(t.clone(), "a"), Element::tagged(t, "b")],
    /// )
    /// .unwrap();
    /// assert_eq!(set.cardinality(), 2);
    /// ```
    pub fn new(
        element_type: ElementType,
        elements: impl IntoIterator<Item = Element>,
    ) -> Result<Self, MatroidError> {
        let mut set = Set::empty(element_type);
        for e in elements {
            set.add(e)?;
        }
        Ok(set)
    }

    pub fn element_type(&self) -> &ElementType {
        &self.element_type
    }

    fn check_type(&self, other: &ElementType) -> Result<(), MatroidError> {
        if &self.element_type != other {
            return Err(MatroidError::TypeMismatch {
                left: self.element_type.clone(),
                right: other.clone(),
            });
        }
        Ok(())
    }

    /// Inserts `e`. A no-op if its key is already present. Fails if `e`'s
    /// type tag does not match the set's.
    pub fn add(&mut self, e: Element) -> Result<(), MatroidError> {
        self.check_type(&e.element_type)?;
        self.content.entry(e.key.clone()).or_insert(e);
        Ok(())
    }

    /// Removes the element with the same key as `e`. Tolerates absence.
    pub fn remove(&mut self, e: &Element) {
        self.content.remove(&e.key);
    }

    /// Removes the element with the given key. Tolerates absence.
    pub fn remove_key(&mut self, key: &str) {
        self.content.remove(key);
    }

    pub fn cardinality(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// True if every one of `elements` is present (by key; the set's type
    /// tag is not checked, per the documented `Contains`/`Equal` asymmetry).
    pub fn contains<'a>(&self, elements: impl IntoIterator<Item = &'a Element>) -> bool {
        elements.into_iter().all(|e| self.content.contains_key(&e.key))
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.content.contains_key(key)
    }

    /// self ∪ other. Fails on type mismatch.
    pub fn union(&self, other: &Set) -> Result<Set, MatroidError> {
        self.check_type(&other.element_type)?;
        let mut result = self.clone();
        for e in other.content.values() {
            result.content.entry(e.key.clone()).or_insert_with(|| e.clone());
        }
        Ok(result)
    }

    /// self ∩ other. Fails on type mismatch.
    pub fn intersect(&self, other: &Set) -> Result<Set, MatroidError> {
        self.check_type(&other.element_type)?;
        let content = self
            .content
            .iter()
            .filter(|(k, _)| other.content.contains_key(*k))
            .map(|(k, e)| (k.clone(), e.clone()))
            .collect();
        Ok(Set {
            content,
            element_type: self.element_type.clone(),
        })
    }

    /// self − other. Fails on type mismatch.
    pub fn difference(&self, other: &Set) -> Result<Set, MatroidError> {
        self.check_type(&other.element_type)?;
        let content = self
            .content
            .iter()
            .filter(|(k, _)| !other.content.contains_key(*k))
            .map(|(k, e)| (k.clone(), e.clone()))
            .collect();
        Ok(Set {
            content,
            element_type: self.element_type.clone(),
        })
    }

    /// self ⊕ other = (self ∪ other) − (self ∩ other). Fails on type mismatch.
    pub fn symmetric_difference(&self, other: &Set) -> Result<Set, MatroidError> {
        self.check_type(&other.element_type)?;
        let union = self.union(other)?;
        let intersect = self.intersect(other)?;
        union.difference(&intersect)
    }

    /// `self.difference(subset)`, but only if `subset` is actually a subset
    /// of `self`; otherwise `NotASubset`.
    pub fn complement(&self, subset: &Set) -> Result<Set, MatroidError> {
        if !subset.is_subset_of(self) {
            return Err(MatroidError::NotASubset);
        }
        // difference() cannot fail here: is_subset_of already establishes
        // key-compatibility, and we pass subset's own type through.
        self.difference(subset)
    }

    /// Equality compares only the multiset of keys: two sets of different
    /// `ElementType`s with identical keys are considered equal.
    pub fn equal(&self, other: &Set) -> bool {
        self.is_subset_of(other) && other.is_subset_of(self)
    }

    pub fn is_subset_of(&self, other: &Set) -> bool {
        self.content.keys().all(|k| other.content.contains_key(k))
    }

    pub fn is_proper_subset_of(&self, other: &Set) -> bool {
        self.is_subset_of(other) && self.cardinality() < other.cardinality()
    }

    pub fn is_superset_of(&self, other: &Set) -> bool {
        other.is_subset_of(self)
    }

    pub fn is_proper_superset_of(&self, other: &Set) -> bool {
        other.is_proper_subset_of(self)
    }

    /// Iterates over every element exactly once, in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &Element> {
        self.content.values()
    }

    /// Visits elements in order, stopping early the first time `f` returns
    /// `false`.
    pub fn each(&self, mut f: impl FnMut(&Element) -> bool) {
        for e in self.iter() {
            if !f(e) {
                break;
            }
        }
    }

    /// Returns an arbitrary element satisfying `pred`, or `None`.
    pub fn choose(&self, pred: impl Fn(&Element) -> bool) -> Option<&Element> {
        self.iter().find(|e| pred(e))
    }

    /// Removes and returns an arbitrary element, or `None` if empty.
    pub fn pop(&mut self) -> Option<Element> {
        let key = self.content.keys().next().cloned()?;
        self.content.remove(&key)
    }

    /// The subset of elements satisfying `pred`.
    pub fn cond_subset(&self, pred: impl Fn(&Element) -> bool) -> Set {
        let content = self
            .content
            .iter()
            .filter(|(_, e)| pred(e))
            .map(|(k, e)| (k.clone(), e.clone()))
            .collect();
        Set {
            content,
            element_type: self.element_type.clone(),
        }
    }

    pub fn to_slice(&self) -> Vec<&Element> {
        self.iter().collect()
    }
}

impl Display for Set {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Set {{")?;
        for e in self.iter() {
            writeln!(f, "  {}", e.key())?;
        }
        write!(f, "}}")
    }
}

//! State-to-view binding with per-field change detection.
//!
//! A [`StateBinder`] is an explicit registry of observable fields and derived
//! bindings. Each [`bind`](StateBinder::bind) call diffs one immutable
//! snapshot against the last-rendered values:
//!
//! 1. Fields are visited in declaration order. A field whose extracted value
//!    differs from its stored value stores it and fires its render action.
//!    Equal values are skipped, absent values keep the stored one.
//! 2. After every field has been visited, each derived binding with at least
//!    one changed input is evaluated exactly once, in declaration order.
//!
//! Derived combiners read their inputs through [`FieldHandle`]s, so they only
//! ever observe post-update values for the snapshot being applied.
//!
//! # Invariants
//!
//! 1. Binding the same snapshot twice fires no render on the second call.
//! 2. A derived binding fires at most once per snapshot.
//! 3. No derived binding runs before the last field render of its snapshot.

mod derived;
mod field;

pub use field::{Field, FieldHandle, FieldId};

use derived::DerivedBinding;
use field::{FieldChange, FieldSlot};
use tracing::{debug, trace};

/// What one [`StateBinder::bind`] call did.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BindReport {
    /// Fields whose value changed, in declaration order.
    pub changed: Vec<FieldId>,
    /// Fields whose snapshot value was absent and were left untouched.
    pub absent: Vec<FieldId>,
    /// Derived bindings evaluated, in declaration order.
    pub derived: Vec<&'static str>,
}

impl BindReport {
    /// Nothing rendered: no field changed and no derived binding ran.
    pub fn is_noop(&self) -> bool {
        self.changed.is_empty() && self.derived.is_empty()
    }
}

/// Registry of observable fields and derived bindings for snapshot type `S`
/// rendering into view type `V`.
pub struct StateBinder<S, V> {
    fields: Vec<Box<dyn FieldSlot<S, V>>>,
    derived: Vec<DerivedBinding<V>>,
}

impl<S: 'static, V: 'static> Default for StateBinder<S, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: 'static, V: 'static> StateBinder<S, V> {
    /// Empty registry.
    pub fn new() -> Self {
        Self {
            fields: Vec::new(),
            derived: Vec::new(),
        }
    }

    /// Number of declared fields.
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Register a field and return a read handle to its value.
    pub fn declare<T: 'static>(&mut self, field: Field<S, V, T>) -> FieldHandle<T> {
        debug_assert!(
            self.fields.iter().all(|slot| slot.id() != field.id()),
            "field {} declared twice",
            field.id()
        );
        let (handle, slot) = field.into_slot();
        self.fields.push(Box::new(slot));
        handle
    }

    /// Register a derived binding over `inputs`.
    ///
    /// `combine` should read its inputs through handles it captured.
    pub fn derive(
        &mut self,
        name: &'static str,
        inputs: &[FieldId],
        combine: impl FnMut(&mut V) + 'static,
    ) {
        self.derived
            .push(DerivedBinding::new(name, inputs.to_vec(), combine));
    }

    /// Derived binding over two fields, handed their current values.
    pub fn derive2<A, B>(
        &mut self,
        name: &'static str,
        a: &FieldHandle<A>,
        b: &FieldHandle<B>,
        mut combine: impl FnMut(&mut V, &A, &B) + 'static,
    ) where
        A: 'static,
        B: 'static,
    {
        let (ha, hb) = (a.clone(), b.clone());
        self.derive(name, &[a.id(), b.id()], move |view| {
            ha.with(|a| hb.with(|b| combine(view, a, b)));
        });
    }

    /// Derived binding over three fields, handed their current values.
    pub fn derive3<A, B, C>(
        &mut self,
        name: &'static str,
        a: &FieldHandle<A>,
        b: &FieldHandle<B>,
        c: &FieldHandle<C>,
        mut combine: impl FnMut(&mut V, &A, &B, &C) + 'static,
    ) where
        A: 'static,
        B: 'static,
        C: 'static,
    {
        let (ha, hb, hc) = (a.clone(), b.clone(), c.clone());
        self.derive(name, &[a.id(), b.id(), c.id()], move |view| {
            ha.with(|a| hb.with(|b| hc.with(|c| combine(view, a, b, c))));
        });
    }

    /// Derived binding over five fields, handed their current values.
    #[allow(clippy::too_many_arguments)]
    pub fn derive5<A, B, C, D, E>(
        &mut self,
        name: &'static str,
        a: &FieldHandle<A>,
        b: &FieldHandle<B>,
        c: &FieldHandle<C>,
        d: &FieldHandle<D>,
        e: &FieldHandle<E>,
        mut combine: impl FnMut(&mut V, &A, &B, &C, &D, &E) + 'static,
    ) where
        A: 'static,
        B: 'static,
        C: 'static,
        D: 'static,
        E: 'static,
    {
        let (ha, hb, hc, hd, he) = (a.clone(), b.clone(), c.clone(), d.clone(), e.clone());
        self.derive(name, &[a.id(), b.id(), c.id(), d.id(), e.id()], move |view| {
            ha.with(|a| {
                hb.with(|b| {
                    hc.with(|c| hd.with(|d| he.with(|e| combine(view, a, b, c, d, e))))
                })
            });
        });
    }

    /// Render initial values of fields declared with
    /// [`Field::render_on_attach`], then evaluate every derived binding once.
    pub fn attach(&mut self, view: &mut V) {
        for slot in self.fields.iter_mut().filter(|slot| slot.renders_on_attach()) {
            slot.render_current(view);
        }
        for binding in &mut self.derived {
            binding.evaluate(view);
        }
        debug!(
            fields = self.fields.len(),
            derived = self.derived.len(),
            "Binding attached"
        );
    }

    /// Apply one snapshot.
    pub fn bind(&mut self, snapshot: &S, view: &mut V) -> BindReport {
        let mut report = BindReport::default();

        for slot in &mut self.fields {
            match slot.apply(snapshot, view) {
                FieldChange::Changed => {
                    trace!(field = %slot.id(), "Field rendered");
                    report.changed.push(slot.id());
                }
                FieldChange::Absent => report.absent.push(slot.id()),
                FieldChange::Unchanged => {}
            }
        }

        if report.changed.is_empty() {
            return report;
        }

        for binding in &mut self.derived {
            if binding.depends_on_any(&report.changed) {
                binding.evaluate(view);
                report.derived.push(binding.name());
            }
        }

        debug!(
            changed = report.changed.len(),
            derived = report.derived.len(),
            "Snapshot bound"
        );
        report
    }
}

#[cfg(test)]
#[path = "binder_tests.rs"]
mod tests;

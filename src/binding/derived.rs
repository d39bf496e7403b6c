//! Derived bindings: one render step over several observable fields.

use super::field::FieldId;

pub(crate) struct DerivedBinding<V> {
    name: &'static str,
    inputs: Vec<FieldId>,
    combine: Box<dyn FnMut(&mut V)>,
}

impl<V> DerivedBinding<V> {
    pub(crate) fn new(
        name: &'static str,
        inputs: Vec<FieldId>,
        combine: impl FnMut(&mut V) + 'static,
    ) -> Self {
        Self {
            name,
            inputs,
            combine: Box::new(combine),
        }
    }

    pub(crate) fn name(&self) -> &'static str {
        self.name
    }

    pub(crate) fn depends_on_any(&self, changed: &[FieldId]) -> bool {
        self.inputs.iter().any(|input| changed.contains(input))
    }

    pub(crate) fn evaluate(&mut self, view: &mut V) {
        (self.combine)(view);
    }
}

//! Observable fields.
//!
//! A field owns the last-rendered value of one snapshot property. On every
//! bind the freshly extracted value is equality-compared against it; only a
//! difference stores the new value and fires the render action.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Name of a declared field. Unique within one [`StateBinder`](super::StateBinder).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldId(&'static str);

impl FieldId {
    /// Field id from its declared name.
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    /// Declared name.
    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Read handle to a field's last-rendered value.
///
/// Handles are cheap to clone and are what derived combiners capture. A read
/// always returns the value stored by the most recent bind.
pub struct FieldHandle<T> {
    id: FieldId,
    value: Rc<RefCell<T>>,
}

impl<T> Clone for FieldHandle<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            value: Rc::clone(&self.value),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for FieldHandle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldHandle")
            .field("id", &self.id)
            .field("value", &*self.value.borrow())
            .finish()
    }
}

impl<T> FieldHandle<T> {
    /// Field this handle reads.
    pub fn id(&self) -> FieldId {
        self.id
    }

    /// Borrow the current value for the duration of `f`.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.value.borrow())
    }
}

impl<T: Clone> FieldHandle<T> {
    /// Clone of the current value.
    #[must_use]
    pub fn get(&self) -> T {
        self.value.borrow().clone()
    }
}

type Extract<S, T> = Box<dyn Fn(&S) -> Option<T>>;
type Render<V, T> = Box<dyn FnMut(&mut V, &T)>;

/// Declaration of one observable field, consumed by
/// [`StateBinder::declare`](super::StateBinder::declare).
pub struct Field<S, V, T> {
    id: FieldId,
    initial: T,
    extract: Extract<S, T>,
    equals: fn(&T, &T) -> bool,
    render: Option<Render<V, T>>,
    render_on_attach: bool,
}

impl<S, V, T: PartialEq + 'static> Field<S, V, T> {
    /// A field whose snapshot value is always present.
    pub fn new(id: &'static str, initial: T, extract: impl Fn(&S) -> T + 'static) -> Self {
        Self::optional(id, initial, move |snapshot| Some(extract(snapshot)))
    }

    /// A field whose snapshot value may be absent.
    ///
    /// An absent value is never rendered: the field keeps its last value.
    pub fn optional(
        id: &'static str,
        initial: T,
        extract: impl Fn(&S) -> Option<T> + 'static,
    ) -> Self {
        Self {
            id: FieldId::new(id),
            initial,
            extract: Box::new(extract),
            equals: <T as PartialEq>::eq,
            render: None,
            render_on_attach: false,
        }
    }
}

impl<S, V, T> Field<S, V, T> {
    /// Render action fired with the new value whenever it changes.
    pub fn on_change(mut self, render: impl FnMut(&mut V, &T) + 'static) -> Self {
        self.render = Some(Box::new(render));
        self
    }

    /// Also render the initial value when the view attaches.
    pub fn render_on_attach(mut self) -> Self {
        self.render_on_attach = true;
        self
    }

    /// Replace value equality with a custom comparison.
    pub fn compare_with(mut self, equals: fn(&T, &T) -> bool) -> Self {
        self.equals = equals;
        self
    }

    /// Declared id.
    pub fn id(&self) -> FieldId {
        self.id
    }

    pub(crate) fn into_slot(self) -> (FieldHandle<T>, ObservableField<S, V, T>) {
        let value = Rc::new(RefCell::new(self.initial));
        let handle = FieldHandle {
            id: self.id,
            value: Rc::clone(&value),
        };
        let slot = ObservableField {
            id: self.id,
            value,
            extract: self.extract,
            equals: self.equals,
            render: self.render,
            render_on_attach: self.render_on_attach,
        };
        (handle, slot)
    }
}

/// Outcome of applying one snapshot to one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FieldChange {
    Changed,
    Unchanged,
    Absent,
}

/// Type-erased view of a field so heterogeneous fields share one registry.
pub(crate) trait FieldSlot<S, V> {
    fn id(&self) -> FieldId;
    fn apply(&mut self, snapshot: &S, view: &mut V) -> FieldChange;
    fn render_current(&mut self, view: &mut V);
    fn renders_on_attach(&self) -> bool;
}

pub(crate) struct ObservableField<S, V, T> {
    id: FieldId,
    value: Rc<RefCell<T>>,
    extract: Extract<S, T>,
    equals: fn(&T, &T) -> bool,
    render: Option<Render<V, T>>,
    render_on_attach: bool,
}

impl<S, V, T> FieldSlot<S, V> for ObservableField<S, V, T> {
    fn id(&self) -> FieldId {
        self.id
    }

    fn apply(&mut self, snapshot: &S, view: &mut V) -> FieldChange {
        let Some(next) = (self.extract)(snapshot) else {
            return FieldChange::Absent;
        };
        let unchanged = {
            let current = self.value.borrow();
            (self.equals)(&*current, &next)
        };
        if unchanged {
            return FieldChange::Unchanged;
        }
        *self.value.borrow_mut() = next;
        self.render_current(view);
        FieldChange::Changed
    }

    fn render_current(&mut self, view: &mut V) {
        if let Some(render) = self.render.as_mut() {
            let value = self.value.borrow();
            render(view, &*value);
        }
    }

    fn renders_on_attach(&self) -> bool {
        self.render_on_attach
    }
}

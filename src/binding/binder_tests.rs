//! Tests for StateBinder change detection and derived binding ordering.

use super::*;

#[derive(Debug, Clone, Default, PartialEq)]
struct Snap {
    a: i32,
    b: String,
    c: bool,
    title: Option<String>,
}

#[derive(Debug, Default)]
struct Recorder {
    events: Vec<String>,
}

impl Recorder {
    fn renders(&self) -> usize {
        self.events.len()
    }
}

fn binder_with_fields() -> (
    StateBinder<Snap, Recorder>,
    FieldHandle<i32>,
    FieldHandle<String>,
    FieldHandle<bool>,
) {
    let mut binder = StateBinder::new();
    let a = binder.declare(
        Field::new("a", 0, |s: &Snap| s.a).on_change(|r: &mut Recorder, v| {
            r.events.push(format!("a={v}"));
        }),
    );
    let b = binder.declare(
        Field::new("b", String::new(), |s: &Snap| s.b.clone()).on_change(
            |r: &mut Recorder, v| {
                r.events.push(format!("b={v}"));
            },
        ),
    );
    let c = binder.declare(Field::new("c", false, |s: &Snap| s.c));
    (binder, a, b, c)
}

// ===== Change detection =====

#[test]
fn bind_renders_only_changed_fields() {
    let (mut binder, _, _, _) = binder_with_fields();
    let mut view = Recorder::default();

    let report = binder.bind(
        &Snap {
            a: 1,
            ..Snap::default()
        },
        &mut view,
    );

    assert_eq!(view.events, vec!["a=1"]);
    assert_eq!(report.changed, vec![FieldId::new("a")]);
}

#[test]
fn binding_identical_snapshot_twice_renders_nothing_second_time() {
    let (mut binder, _, _, _) = binder_with_fields();
    let mut view = Recorder::default();
    let snap = Snap {
        a: 7,
        b: "x".to_string(),
        c: true,
        title: Some("t".to_string()),
    };

    binder.bind(&snap, &mut view);
    let before = view.renders();
    let report = binder.bind(&snap, &mut view);

    assert_eq!(view.renders(), before);
    assert!(report.is_noop());
}

#[test]
fn fields_render_in_declaration_order() {
    let (mut binder, _, _, _) = binder_with_fields();
    let mut view = Recorder::default();

    binder.bind(
        &Snap {
            a: 2,
            b: "two".to_string(),
            ..Snap::default()
        },
        &mut view,
    );

    assert_eq!(view.events, vec!["a=2", "b=two"]);
}

#[test]
fn handle_reads_post_update_value() {
    let (mut binder, a, b, c) = binder_with_fields();
    let mut view = Recorder::default();

    binder.bind(
        &Snap {
            a: 3,
            b: "three".to_string(),
            c: true,
            title: None,
        },
        &mut view,
    );

    assert_eq!(a.get(), 3);
    assert_eq!(b.get(), "three");
    assert!(c.get());
}

// ===== Absent values =====

#[test]
fn absent_optional_value_keeps_last_value_without_render() {
    let mut binder: StateBinder<Snap, Recorder> = StateBinder::new();
    let title = binder.declare(
        Field::optional("title", "loading".to_string(), |s: &Snap| s.title.clone()).on_change(
            |r: &mut Recorder, v| r.events.push(format!("title={v}")),
        ),
    );
    let mut view = Recorder::default();

    binder.bind(
        &Snap {
            title: Some("Hello".to_string()),
            ..Snap::default()
        },
        &mut view,
    );
    let report = binder.bind(&Snap::default(), &mut view);

    assert_eq!(title.get(), "Hello");
    assert_eq!(view.events, vec!["title=Hello"]);
    assert_eq!(report.absent, vec![FieldId::new("title")]);
    assert!(report.changed.is_empty());
}

// ===== Derived bindings =====

#[test]
fn derived_binding_observes_updated_inputs_after_field_renders() {
    let (mut binder, a, b, c) = binder_with_fields();
    binder.derive3("abc", &a, &b, &c, |r: &mut Recorder, a, b, c| {
        r.events.push(format!("derived a={a} b={b} c={c}"));
    });
    let mut view = Recorder::default();

    let report = binder.bind(
        &Snap {
            a: 5,
            b: "five".to_string(),
            c: false,
            title: None,
        },
        &mut view,
    );

    assert_eq!(
        view.events,
        vec!["a=5", "b=five", "derived a=5 b=five c=false"]
    );
    assert_eq!(report.derived, vec!["abc"]);
}

#[test]
fn derived_binding_fires_once_when_several_inputs_change() {
    let (mut binder, a, b, _) = binder_with_fields();
    binder.derive2("ab", &a, &b, |r: &mut Recorder, _, _| {
        r.events.push("derived".to_string());
    });
    let mut view = Recorder::default();

    binder.bind(
        &Snap {
            a: 1,
            b: "1".to_string(),
            ..Snap::default()
        },
        &mut view,
    );

    let derived_count = view.events.iter().filter(|e| *e == "derived").count();
    assert_eq!(derived_count, 1);
}

#[test]
fn derived_binding_skipped_when_no_input_changed() {
    let (mut binder, _, b, c) = binder_with_fields();
    binder.derive2("bc", &b, &c, |r: &mut Recorder, _, _| {
        r.events.push("derived".to_string());
    });
    let mut view = Recorder::default();

    let report = binder.bind(
        &Snap {
            a: 9,
            ..Snap::default()
        },
        &mut view,
    );

    assert_eq!(view.events, vec!["a=9"]);
    assert!(report.derived.is_empty());
}

#[test]
fn derived_binding_fires_for_observe_only_input() {
    let (mut binder, _, _, c) = binder_with_fields();
    binder.derive("c-only", &[c.id()], {
        let c = c.clone();
        move |r: &mut Recorder| r.events.push(format!("c={}", c.get()))
    });
    let mut view = Recorder::default();

    binder.bind(
        &Snap {
            c: true,
            ..Snap::default()
        },
        &mut view,
    );

    assert_eq!(view.events, vec!["c=true"]);
}

// ===== Attach =====

#[test]
fn attach_renders_only_fields_marked_for_initial_render() {
    let mut binder: StateBinder<Snap, Recorder> = StateBinder::new();
    binder.declare(
        Field::new("a", 10, |s: &Snap| s.a)
            .on_change(|r: &mut Recorder, v| r.events.push(format!("a={v}")))
            .render_on_attach(),
    );
    binder.declare(
        Field::new("c", false, |s: &Snap| s.c)
            .on_change(|r: &mut Recorder, v| r.events.push(format!("c={v}"))),
    );
    let mut view = Recorder::default();

    binder.attach(&mut view);

    assert_eq!(view.events, vec!["a=10"]);
}

#[test]
fn attach_evaluates_derived_bindings_once() {
    let (mut binder, a, b, _) = binder_with_fields();
    binder.derive2("ab", &a, &b, |r: &mut Recorder, a, b| {
        r.events.push(format!("derived {a} {b:?}"));
    });
    let mut view = Recorder::default();

    binder.attach(&mut view);

    assert_eq!(view.events, vec!["derived 0 \"\""]);
}

#[test]
fn custom_comparison_controls_change_detection() {
    let mut binder: StateBinder<Snap, Recorder> = StateBinder::new();
    binder.declare(
        Field::new("b", String::new(), |s: &Snap| s.b.clone())
            .compare_with(|old, new| old.eq_ignore_ascii_case(new))
            .on_change(|r: &mut Recorder, v| r.events.push(format!("b={v}"))),
    );
    let mut view = Recorder::default();

    binder.bind(
        &Snap {
            b: "abc".to_string(),
            ..Snap::default()
        },
        &mut view,
    );
    binder.bind(
        &Snap {
            b: "ABC".to_string(),
            ..Snap::default()
        },
        &mut view,
    );

    assert_eq!(view.events, vec!["b=abc"]);
}

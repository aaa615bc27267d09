//! End-to-end behaviour of getter validation and synthesis through the public API.
//!
//! The host here is a hand-rolled fake implementing the capability traits directly,
//! rather than the bundled class model.

use getterkit::{
    AccessLevel, ClassHandle, FieldHandle, GetterAnnotation, GetterFieldProcessor, MethodVisibility, Modifier,
    ReadUsageRegistry, Severity, SyntheticMethod, TypeRef, naming,
};
use std::thread;

struct FakeClass {
    name: &'static str,
    methods: Vec<&'static str>,
}

impl ClassHandle for FakeClass {
    fn qualified_name(&self) -> &str {
        self.name
    }

    fn method_names(&self) -> Vec<&str> {
        self.methods.clone()
    }
}

struct FakeField<'a> {
    name: &'static str,
    ty: TypeRef,
    modifiers: Vec<Modifier>,
    initialized: bool,
    class: &'a FakeClass,
}

impl FieldHandle for FakeField<'_> {
    fn name(&self) -> &str {
        self.name
    }

    fn declared_type(&self) -> &TypeRef {
        &self.ty
    }

    fn has_modifier(&self, modifier: Modifier) -> bool {
        self.modifiers.contains(&modifier)
    }

    fn has_initializer(&self) -> bool {
        self.initialized
    }

    fn containing_class(&self) -> &dyn ClassHandle {
        self.class
    }
}

fn class_with(methods: &[&'static str]) -> FakeClass {
    FakeClass {
        name: "com.example.Sample",
        methods: methods.to_vec(),
    }
}

fn field<'a>(class: &'a FakeClass, name: &'static str, ty: TypeRef, modifiers: &[Modifier], initialized: bool) -> FakeField<'a> {
    FakeField {
        name,
        ty,
        modifiers: modifiers.to_vec(),
        initialized,
        class,
    }
}

fn generate(field: &FakeField<'_>, annotation: GetterAnnotation) -> (bool, Vec<SyntheticMethod>) {
    let processor = GetterFieldProcessor::default();
    let usage = ReadUsageRegistry::new();
    let mut target = Vec::new();
    let result = processor.process(field, &annotation, &usage, &mut target);
    (result.is_ok(), target)
}

#[test]
fn canonical_names_follow_field_type() {
    for name in ["active", "enabled", "aURL", "x"] {
        assert_eq!(naming::getter_name(name, true), format!("is{}", naming::capitalize(name)));
        assert_eq!(naming::getter_name(name, false), format!("get{}", naming::capitalize(name)));
    }
}

#[test]
fn plain_field_without_collision_is_clean() {
    let class = class_with(&["toString", "hashCode"]);
    let target = field(&class, "label", TypeRef::named("String"), &[Modifier::Private], false);

    let result = GetterFieldProcessor::default().validate(&target, &GetterAnnotation::plain());

    assert!(result.is_ok());
    assert!(result.diagnostics().is_empty());
}

#[test]
fn lazy_with_access_none_yields_one_warning() {
    let class = class_with(&[]);
    let target = field(&class, "label", TypeRef::named("String"), &[], false);

    let result = GetterFieldProcessor::default()
        .validate(&target, &GetterAnnotation::lazy().with_access(AccessLevel::None));

    assert!(!result.is_ok());
    assert_eq!(result.warnings().count(), 1);
    assert_eq!(result.errors().count(), 0);
}

#[test]
fn lazy_non_private_field_is_an_error() {
    let class = class_with(&[]);
    let target = field(&class, "label", TypeRef::named("String"), &[Modifier::Final], true);

    let result = GetterFieldProcessor::default().validate(&target, &GetterAnnotation::lazy());

    assert!(!result.is_ok());
    assert!(result.errors().any(|d| d.message.contains("private and final")));
}

#[test]
fn lazy_without_initializer_is_an_error() {
    let class = class_with(&[]);
    let target = field(
        &class,
        "label",
        TypeRef::named("String"),
        &[Modifier::Private, Modifier::Final],
        false,
    );

    let result = GetterFieldProcessor::default().validate(&target, &GetterAnnotation::lazy());

    assert!(!result.is_ok());
    let errors: Vec<_> = result.errors().collect();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].message.contains("field initialization"));
}

#[test]
fn existing_getter_blocks_generation() {
    let class = class_with(&["getFoo"]);
    let target = field(&class, "foo", TypeRef::int(), &[], false);

    let (ok, methods) = generate(&target, GetterAnnotation::plain());
    assert!(!ok);
    assert!(methods.is_empty());

    let result = GetterFieldProcessor::default().validate(&target, &GetterAnnotation::plain());
    let warning = &result.diagnostics()[0];
    assert_eq!(warning.severity, Severity::Warning);
    assert!(warning.message.contains("getFoo"));
}

#[test]
fn collision_ignores_unrelated_names() {
    let class = class_with(&["getFooBar", "foo", "setFoo"]);
    let target = field(&class, "foo", TypeRef::int(), &[], false);

    let (ok, methods) = generate(&target, GetterAnnotation::plain());
    assert!(ok);
    assert_eq!(methods.len(), 1);
}

#[test]
fn validation_is_repeatable() {
    let class = class_with(&["getOn", "isOn"]);
    let target = field(&class, "on", TypeRef::boolean(), &[], false);
    let processor = GetterFieldProcessor::default();

    let first = processor.validate(&target, &GetterAnnotation::plain());
    let second = processor.validate(&target, &GetterAnnotation::plain());

    assert_eq!(first.diagnostics().len(), 2);
    assert_eq!(first, second);
}

#[test]
fn synthesized_name_matches_canonical_name() {
    let class = class_with(&[]);
    let processor = GetterFieldProcessor::default();
    let usage = ReadUsageRegistry::new();

    for (name, ty) in [("ready", TypeRef::boolean()), ("size", TypeRef::int()), ("isOpen", TypeRef::boolean())] {
        let is_boolean = ty.is_primitive_boolean();
        let target = field(&class, name, ty, &[Modifier::Static], false);
        let method = processor.synthesize(&target, MethodVisibility::Public, &usage);
        assert_eq!(method.name(), naming::getter_name(name, is_boolean));
        assert!(method.is_static());
    }
}

#[test]
fn lazy_private_final_boolean_generates_is_getter() {
    let class = class_with(&[]);
    let target = field(
        &class,
        "active",
        TypeRef::boolean(),
        &[Modifier::Private, Modifier::Final],
        true,
    );

    let (ok, methods) = generate(&target, GetterAnnotation::lazy());

    assert!(ok);
    assert_eq!(methods.len(), 1);
    let method = &methods[0];
    assert_eq!(method.name(), "isActive");
    assert_eq!(method.return_type(), &TypeRef::boolean());
    assert_eq!(method.visibility(), MethodVisibility::Public);
    assert!(!method.is_static());
    assert_eq!(method.owner_class(), "com.example.Sample");
}

#[test]
fn static_int_generates_static_getter() {
    let class = class_with(&[]);
    let target = field(&class, "count", TypeRef::int(), &[Modifier::Static], false);

    let (ok, methods) = generate(&target, GetterAnnotation::plain());

    assert!(ok);
    let method = &methods[0];
    assert_eq!(method.name(), "getCount");
    assert_eq!(method.return_type(), &TypeRef::int());
    assert!(method.is_static());
    assert_eq!(method.signature(), "public static int getCount()");
}

#[test]
fn package_access_generates_modifierless_getter() {
    let class = class_with(&[]);
    let target = field(&class, "count", TypeRef::int(), &[], false);

    let (_, methods) = generate(&target, GetterAnnotation::plain().with_access(AccessLevel::Package));

    assert_eq!(methods[0].visibility(), MethodVisibility::Package);
    assert_eq!(methods[0].signature(), "int getCount()");
}

#[test]
fn each_access_level_maps_to_its_visibility() {
    let class = class_with(&[]);
    let target = field(&class, "count", TypeRef::int(), &[Modifier::Private], false);

    let cases = [
        (AccessLevel::Public, MethodVisibility::Public, "public int getCount()"),
        (AccessLevel::Protected, MethodVisibility::Protected, "protected int getCount()"),
        (AccessLevel::Package, MethodVisibility::Package, "int getCount()"),
        (AccessLevel::Private, MethodVisibility::Private, "private int getCount()"),
    ];
    for (level, visibility, signature) in cases {
        let (ok, methods) = generate(&target, GetterAnnotation::plain().with_access(level));
        assert!(ok, "{level}");
        assert_eq!(methods.len(), 1, "{level}");
        assert_eq!(methods[0].visibility(), visibility);
        assert_eq!(methods[0].signature(), signature);
    }

    let (ok, methods) = generate(&target, GetterAnnotation::plain().with_access(AccessLevel::None));
    assert!(!ok);
    assert!(methods.is_empty());
}

#[test]
fn one_processor_serves_several_threads() {
    let class = class_with(&[]);
    let processor = GetterFieldProcessor::default();
    let usage = ReadUsageRegistry::new();
    let names = ["alpha", "beta", "gamma", "delta"];

    let generated: Vec<String> = thread::scope(|scope| {
        let handles: Vec<_> = names
            .iter()
            .map(|&name| {
                let (class, processor, usage) = (&class, &processor, &usage);
                scope.spawn(move || {
                    let target = field(class, name, TypeRef::int(), &[], false);
                    let mut methods = Vec::new();
                    processor.process(&target, &GetterAnnotation::plain(), usage, &mut methods);
                    methods.pop().map(|method| method.name().to_string())
                })
            })
            .collect();
        handles.into_iter().filter_map(|handle| handle.join().unwrap()).collect()
    });

    assert_eq!(generated, ["getAlpha", "getBeta", "getGamma", "getDelta"]);
    assert_eq!(usage.read_fields().len(), names.len());
}

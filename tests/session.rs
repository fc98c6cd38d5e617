use std::collections::HashMap;

use fnscript::{
    Error,
    error::{ParseError, RuntimeError},
    interpreter::{
        session::{ModuleResolver, Session, evaluate_program},
        value::{core::Value, environment::Environment},
    },
    parse,
};

/// Resolves modules from in-memory sources, counting every request.
#[derive(Default)]
struct MapResolver {
    sources:  HashMap<&'static str, &'static str>,
    requests: Vec<String>,
}

impl MapResolver {
    fn with(mut self, name: &'static str, source: &'static str) -> Self {
        self.sources.insert(name, source);
        self
    }
}

impl ModuleResolver for MapResolver {
    fn resolve(&mut self, name: &str) -> Result<Option<Environment>, Error> {
        self.requests.push(name.to_string());
        let Some(source) = self.sources.get(name).copied() else {
            return Ok(None);
        };
        let nodes = parse(source)?;
        let module = Environment::root().child();
        evaluate_program(&module, &nodes, self)?;
        Ok(Some(module))
    }
}

#[test]
fn bindings_persist_across_units() {
    let mut session = Session::new();

    session.run("x = 1").unwrap();
    session.run("double = (n) { n * 2 }").unwrap();

    assert_eq!(session.run("double(x)").unwrap(), Some(Value::Integer(2)));
}

#[test]
fn runtime_failure_rolls_back_the_whole_unit() {
    let mut session = Session::new();
    session.run("kept = 1").unwrap();

    let result = session.run("lost = 2; also_lost = 3; undefined_name");
    assert_eq!(result,
               Err(Error::Runtime(RuntimeError::UnknownIdentifier { name:
                                                                        "undefined_name".to_string() })));

    assert!(session.root().contains("kept"));
    assert!(!session.root().contains("lost"));
    assert!(!session.root().contains("also_lost"));

    // The names are free again.
    assert_eq!(session.run("lost = 20; lost").unwrap(), Some(Value::Integer(20)));
}

#[test]
fn failed_unit_cannot_add_members_to_committed_blocks() {
    let mut session = Session::new();
    session.run("p = { x = 1 }").unwrap();

    assert_eq!(session.run("p.(y = 2); undefined"),
               Err(Error::Runtime(RuntimeError::InvalidAssignmentTarget)));
    assert_eq!(session.run("p.y"),
               Err(Error::Runtime(RuntimeError::UnknownIdentifier { name: "y".to_string() })));
    assert_eq!(session.run("p.x").unwrap(), Some(Value::Integer(1)));
}

#[test]
fn syntax_failure_leaves_the_root_untouched() {
    let mut session = Session::new();
    let before = session.root().bindings().len();

    assert!(matches!(session.run("y = 1; f(1"),
                     Err(Error::Parse(ParseError::UnexpectedEndOfInput { .. }))));
    assert!(matches!(session.run("y = [1]"), Err(Error::Lex(_))));

    assert_eq!(session.root().bindings().len(), before);
    assert!(!session.root().contains("y"));
}

#[test]
fn rolled_back_import_restores_overwritten_names() {
    let mut session = Session::new();
    session.run("a = 1; m = { a = 2 }").unwrap();

    assert!(session.run("import m; missing").is_err());

    assert_eq!(session.run("a").unwrap(), Some(Value::Integer(1)));
}

#[test]
fn redefinition_across_units() {
    let mut session = Session::new();
    session.run("x = 5").unwrap();

    assert_eq!(session.run("x = 6"),
               Err(Error::Runtime(RuntimeError::Redefinition { name: "x".to_string() })));
    assert_eq!(session.run("x").unwrap(), Some(Value::Integer(5)));
}

#[test]
fn fresh_sessions_are_independent() {
    let mut first = Session::new();
    let mut second = Session::new();

    first.run("shared = 1").unwrap();

    assert!(second.run("shared").is_err());
    assert!(!first.root().ptr_eq(second.root()));
}

#[test]
fn resolver_modules_are_bound_by_name() {
    let resolver = MapResolver::default().with("math", "double = (x) { x * 2 }; ten = 10");
    let mut session = Session::with_resolver(resolver);

    assert_eq!(session.run("use math; math.double(4)").unwrap(), Some(Value::Integer(8)));
    assert_eq!(session.run("import math; double(ten)").unwrap(), Some(Value::Integer(20)));
}

#[test]
fn modules_only_expose_their_own_bindings() {
    let resolver = MapResolver::default().with("math", "ten = 10");
    let mut session = Session::with_resolver(resolver);

    session.run("use math; import math").unwrap();

    assert_eq!(session.run("ten").unwrap(), Some(Value::Integer(10)));
    let math = session.run("math").unwrap().unwrap();
    assert_eq!(math.to_string(), "{ten: 10}");
}

#[test]
fn unknown_modules_are_ignored() {
    let mut session = Session::with_resolver(MapResolver::default());

    assert_eq!(session.run("use nothing; 1").unwrap(), Some(Value::Integer(1)));
    assert!(!session.root().contains("nothing"));
}

#[test]
fn bound_names_are_not_resolved_again() {
    let resolver = MapResolver::default().with("math", "ten = 10");
    let mut session = Session::with_resolver(resolver);

    session.run("use math").unwrap();
    session.run("use math").unwrap();

    assert!(session.root().contains("math"));
    assert_eq!(session.resolver().requests, ["math"]);
}

#[test]
fn modules_can_use_other_modules() {
    let resolver = MapResolver::default().with("base", "one = 1")
                                         .with("derived", "use base; two = (base.one + 1)");
    let mut session = Session::with_resolver(resolver);

    assert_eq!(session.run("use derived; derived.two").unwrap(), Some(Value::Integer(2)));
}

#[test]
fn broken_module_fails_the_unit() {
    let resolver = MapResolver::default().with("broken", "x = (");
    let mut session = Session::with_resolver(resolver);

    assert!(matches!(session.run("kept = 1; use broken"), Err(Error::Parse(_))));
    assert!(!session.root().contains("kept"));
    assert!(!session.root().contains("broken"));
}

use stacklog::{stack, AtomicFailure, FailureInput, StackedError};

fn texts(err: &StackedError) -> Vec<&str> {
    err.iter().map(|f| f.message()).collect()
}

#[test]
fn flattens_depth_first_in_order() {
    let inner = StackedError::build(vec!["b", "c"]);
    let err = stack!["a", inner];

    assert_eq!(texts(&err), ["a", "b", "c"]);
}

#[test]
fn rewrapping_prepends_exactly_one_entry() {
    let mut err = StackedError::build("root cause");
    for depth in 0..5 {
        let before = err.len();
        err = StackedError::wrap(format!("context {}", depth), err);
        assert_eq!(err.len(), before + 1);
    }
    assert_eq!(err.head_message(), "context 4");
    assert_eq!(err.stack().last().unwrap().message(), "root cause");
}

#[test]
fn nested_sequences_flatten_recursively() {
    let err = stack![
        "outer",
        vec![
            FailureInput::from("mid 1"),
            FailureInput::List(vec![FailureInput::from("deep")]),
            FailureInput::from("mid 2"),
        ],
    ];

    assert_eq!(texts(&err), ["outer", "mid 1", "deep", "mid 2"]);
}

#[test]
fn scalars_become_message_entries() {
    let err = stack!["failed", 404, 2.5];

    assert_eq!(texts(&err), ["failed", "404", "2.5"]);
}

#[test]
fn head_message_is_outermost_entry() {
    let err = stack!["outermost", "inner", "root"];

    assert_eq!(err.head_message(), "outermost");
    assert_eq!(err.to_string(), "outermost");
    assert_eq!(format!("{}", err), "outermost");
}

#[test]
fn empty_stack_has_synthetic_identity() {
    let err = stack!();

    assert!(err.is_empty());
    assert_eq!(err.head_message(), "Unknown error");
    assert_eq!(err.stringify(), "");
}

#[test]
fn stringify_renders_one_line_per_entry() {
    let err = stack!["a", "b", "c", "d"];
    let rendered = err.stringify();
    let lines: Vec<&str> = rendered.lines().collect();

    assert_eq!(lines.len(), 4);
    for (line, expected) in lines.iter().zip(["a", "b", "c", "d"]) {
        assert_eq!(*line, format!("error: {}", expected));
    }
}

#[test]
fn stringify_indents_origin_traces() {
    let err = stack![
        AtomicFailure::with_trace("lookup failed", "at resolver.rs:42\nat main.rs:7"),
        "root cause",
    ];

    assert_eq!(
        err.stringify(),
        "error: lookup failed\n    at resolver.rs:42\n    at main.rs:7\nerror: root cause"
    );
}

#[test]
fn source_chains_flatten_outermost_first() {
    use std::fmt;

    #[derive(Debug)]
    struct Inner;

    impl fmt::Display for Inner {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "root cause")
        }
    }

    impl std::error::Error for Inner {}

    #[derive(Debug)]
    struct Outer(Inner);

    impl fmt::Display for Outer {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "request failed")
        }
    }

    impl std::error::Error for Outer {
        fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
            Some(&self.0)
        }
    }

    let err = StackedError::build(FailureInput::from_error(&Outer(Inner)));

    assert_eq!(texts(&err), ["request failed", "root cause"]);
}

#[test]
fn implements_std_error() {
    let err = stack!["context", "root"];
    let dynamic: &dyn std::error::Error = &err;

    assert_eq!(dynamic.to_string(), "context");
}

use std::io;

use datagen::error::Error;

#[test]
fn test_error_conversion() {
    let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "permission denied");
    let err: Error = io_err.into();

    match err {
        Error::IoError(_) => (),
        _ => panic!("Expected IoError variant"),
    }

    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    assert!(matches!(Error::from(json_err), Error::JsonError(_)));
}

#[test]
fn test_error_display() {
    let err = Error::ContextError("not in data/<namespace>/recipes directory".to_string());
    assert_eq!(err.to_string(), "Context error: not in data/<namespace>/recipes directory.");

    let err = Error::ValidationError("bad token".to_string());
    assert_eq!(err.to_string(), "Validation error: bad token.");

    let err = Error::UnresolvedPlaceholder {
        template: "slab".to_string(),
        pointer: "/variants/type=top/model".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Template 'slab' has an unresolved placeholder at '/variants/type=top/model'."
    );
}

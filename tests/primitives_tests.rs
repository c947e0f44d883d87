use sovran_bundle::{Bundle, BundleExt, RequireError};

fn test_bundle() -> Bundle {
    let mut bundle = Bundle::new();
    bundle.put_boolean("boolean", true);
    bundle.put_byte("byte", 1);
    bundle.put_char("char", 'a');
    bundle.put_double("double", 1.0);
    bundle.put_float("float", 1.0);
    bundle.put_long("long", 1);
    bundle.put_int("int", 1);
    bundle.put_short("short", 1);

    // Not one of the primitive kinds
    bundle.put_string("string", "a");
    bundle
}

#[test]
fn test_boolean() -> Result<(), RequireError> {
    let bundle = test_bundle();

    assert_eq!(bundle.get_boolean_or_none("boolean"), Some(true));
    assert_eq!(bundle.get_boolean_or_none("string"), None);
    assert_eq!(bundle.get_boolean_or_none("invalid"), None);

    assert!(bundle.require_boolean("boolean")?);
    assert!(matches!(
        bundle.require_boolean("invalid"),
        Err(RequireError::Argument { .. })
    ));
    assert!(matches!(
        bundle.require_boolean("string"),
        Err(RequireError::State { .. })
    ));
    Ok(())
}

#[test]
fn test_byte() -> Result<(), RequireError> {
    let bundle = test_bundle();

    assert_eq!(bundle.get_byte_or_none("byte"), Some(1));
    assert_eq!(bundle.get_byte_or_none("string"), None);
    assert_eq!(bundle.get_byte_or_none("invalid"), None);

    assert_eq!(bundle.require_byte("byte")?, 1);
    assert!(matches!(
        bundle.require_byte("invalid"),
        Err(RequireError::Argument { .. })
    ));
    assert!(matches!(
        bundle.require_byte("string"),
        Err(RequireError::State { .. })
    ));
    Ok(())
}

#[test]
fn test_char() -> Result<(), RequireError> {
    let bundle = test_bundle();

    assert_eq!(bundle.get_char_or_none("char"), Some('a'));
    assert_eq!(bundle.get_char_or_none("string"), None);
    assert_eq!(bundle.get_char_or_none("invalid"), None);

    assert_eq!(bundle.require_char("char")?, 'a');
    assert!(matches!(
        bundle.require_char("invalid"),
        Err(RequireError::Argument { .. })
    ));
    assert!(matches!(
        bundle.require_char("string"),
        Err(RequireError::State { .. })
    ));
    Ok(())
}

#[test]
fn test_double() -> Result<(), RequireError> {
    let bundle = test_bundle();

    assert_eq!(bundle.get_double_or_none("double"), Some(1.0));
    assert_eq!(bundle.get_double_or_none("string"), None);
    assert_eq!(bundle.get_double_or_none("invalid"), None);

    assert_eq!(bundle.require_double("double")?, 1.0);
    assert!(matches!(
        bundle.require_double("invalid"),
        Err(RequireError::Argument { .. })
    ));
    assert!(matches!(
        bundle.require_double("string"),
        Err(RequireError::State { .. })
    ));
    Ok(())
}

#[test]
fn test_float() -> Result<(), RequireError> {
    let bundle = test_bundle();

    assert_eq!(bundle.get_float_or_none("float"), Some(1.0));
    assert_eq!(bundle.get_float_or_none("string"), None);
    assert_eq!(bundle.get_float_or_none("invalid"), None);

    assert_eq!(bundle.require_float("float")?, 1.0);
    assert!(matches!(
        bundle.require_float("invalid"),
        Err(RequireError::Argument { .. })
    ));
    assert!(matches!(
        bundle.require_float("string"),
        Err(RequireError::State { .. })
    ));
    Ok(())
}

#[test]
fn test_int() -> Result<(), RequireError> {
    let bundle = test_bundle();

    assert_eq!(bundle.get_int_or_none("int"), Some(1));
    assert_eq!(bundle.get_int_or_none("string"), None);
    assert_eq!(bundle.get_int_or_none("invalid"), None);

    assert_eq!(bundle.require_int("int")?, 1);
    assert!(matches!(
        bundle.require_int("invalid"),
        Err(RequireError::Argument { .. })
    ));
    assert!(matches!(
        bundle.require_int("string"),
        Err(RequireError::State { .. })
    ));
    Ok(())
}

#[test]
fn test_long() -> Result<(), RequireError> {
    let bundle = test_bundle();

    assert_eq!(bundle.get_long_or_none("long"), Some(1));
    assert_eq!(bundle.get_long_or_none("string"), None);
    assert_eq!(bundle.get_long_or_none("invalid"), None);

    assert_eq!(bundle.require_long("long")?, 1);
    assert!(matches!(
        bundle.require_long("invalid"),
        Err(RequireError::Argument { .. })
    ));
    assert!(matches!(
        bundle.require_long("string"),
        Err(RequireError::State { .. })
    ));
    Ok(())
}

#[test]
fn test_short() -> Result<(), RequireError> {
    let bundle = test_bundle();

    assert_eq!(bundle.get_short_or_none("short"), Some(1));
    assert_eq!(bundle.get_short_or_none("string"), None);
    assert_eq!(bundle.get_short_or_none("invalid"), None);

    assert_eq!(bundle.require_short("short")?, 1);
    assert!(matches!(
        bundle.require_short("invalid"),
        Err(RequireError::Argument { .. })
    ));
    assert!(matches!(
        bundle.require_short("string"),
        Err(RequireError::State { .. })
    ));
    Ok(())
}

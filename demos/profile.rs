use sovran_bundle::{Bundle, BundleExt, RequireError};
use tracing_subscriber::EnvFilter;

// A user profile passed between components as a loosely typed bundle
struct Profile {
    age: i32,
    premium: bool,
    rating: f32,
    initial: char,
}

fn read_profile(bundle: &Bundle) -> Result<Profile, RequireError> {
    Ok(Profile {
        age: bundle.require_int("age")?,
        premium: bundle.get_boolean_or_none("premium").unwrap_or(false),
        rating: bundle.get_float_or_none("rating").unwrap_or(0.0),
        initial: bundle.require_char("initial")?,
    })
}

fn main() -> Result<(), RequireError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();

    let mut bundle = Bundle::new();
    bundle.put_int("age", 34);
    bundle.put_char("initial", 'R');
    bundle.put_float("rating", 4.5);

    let profile = read_profile(&bundle)?;
    println!(
        "age {}, premium {}, rating {}, initial {}",
        profile.age, profile.premium, profile.rating, profile.initial
    );

    // A producer that writes the age as a string breaks the schema
    bundle.put_string("age", "34");
    match read_profile(&bundle) {
        Ok(_) => println!("Unexpectedly read a profile"),
        Err(e @ RequireError::State { .. }) => println!("Schema mismatch: {}", e),
        Err(e) => println!("Other error: {}", e),
    }

    // The type-committed getter hides the problem behind a default and a warning
    println!("get_int(\"age\") = {}", bundle.get_int("age"));

    // A forgotten key is a different failure
    bundle.put_int("age", 34);
    bundle.remove("initial");
    match read_profile(&bundle) {
        Err(RequireError::Argument { key }) => println!("Missing key: {}", key),
        other => println!("Unexpected result: {:?}", other.map(|p| p.age)),
    }

    Ok(())
}

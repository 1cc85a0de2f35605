//! Bakes the site identity into the crate.
//!
//! `option_env!` only sees the compiler's environment, so the `DAWNVA_*`
//! entries of `.env` are forwarded here. A variable already set in the build
//! environment takes precedence over the file, the same way `dotenvy::dotenv`
//! behaves at runtime.

use std::error::Error;

const SITE_VARS: [&str; 4] = [
    "DAWNVA_BRAND",
    "DAWNVA_CONTACT_EMAIL",
    "DAWNVA_SITE_URL",
    "DAWNVA_PROFILE_IMAGE",
];

fn main() -> Result<(), Box<dyn Error>> {
    println!("cargo:rerun-if-changed=.env");
    for var in SITE_VARS {
        println!("cargo:rerun-if-env-changed={var}");
    }

    let entries = match dotenvy::from_filename_iter(".env") {
        Ok(entries) => entries,
        Err(err) if err.not_found() => return Ok(()),
        Err(err) => return Err(err.into()),
    };

    for entry in entries {
        let (key, value) = entry?;
        if !SITE_VARS.contains(&key.as_str()) || std::env::var_os(&key).is_some() {
            continue;
        }
        if value.contains('\n') {
            return Err(format!("{key} in .env must be a single line").into());
        }
        println!("cargo:rustc-env={key}={value}");
    }

    Ok(())
}

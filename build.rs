//! Stamps the build date and time into the binaries.
//!
//! Honors `SOURCE_DATE_EPOCH` for reproducible builds, otherwise uses the
//! local clock at build time.

use chrono::{DateTime, Local, NaiveDateTime};

fn main() {
    let stamp = source_date_epoch().unwrap_or_else(|| Local::now().naive_local());

    // Same shape as the C preprocessor's __DATE__ and __TIME__
    println!(
        "cargo:rustc-env=DIALOG_BUILD_DATE={}",
        stamp.format("%b %e %Y")
    );
    println!(
        "cargo:rustc-env=DIALOG_BUILD_TIME={}",
        stamp.format("%H:%M:%S")
    );
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=src");
    println!("cargo:rerun-if-changed=Cargo.toml");
    println!("cargo:rerun-if-env-changed=SOURCE_DATE_EPOCH");
}

fn source_date_epoch() -> Option<NaiveDateTime> {
    let secs = std::env::var("SOURCE_DATE_EPOCH").ok()?.trim().parse::<i64>().ok()?;
    DateTime::from_timestamp(secs, 0).map(|dt| dt.naive_utc())
}

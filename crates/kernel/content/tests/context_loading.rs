use std::fs;

use kernel_content::{ConfigLoader, KernelContext};
use kernel_core::{CHECKSUM_REJECTED, PasswordScheme};

#[test]
fn loads_context_from_data_dir() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("config.toml"),
        "max_message_size = 16\npassword_scheme = \"plain\"\nrng_seed = 7\n",
    )
    .unwrap();

    let context = KernelContext::load(dir.path()).unwrap();

    assert_eq!(context.checksum().max_message_size(), 16);
    assert_eq!(context.checksum().checksum(&[0u8; 17]), CHECKSUM_REJECTED);
    assert_eq!(context.checksum().checksum(&[]), 1);

    assert_eq!(context.password_scheme(), PasswordScheme::Plain);
    assert!(context.verify_password("secret", "secret"));
}

#[test]
fn seeded_contexts_share_one_reproducible_stream() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("config.toml"), "rng_seed = 1234\n").unwrap();

    let first = KernelContext::load(dir.path()).unwrap();
    let second = KernelContext::load(dir.path()).unwrap();
    let first_rolls: Vec<i32> = (0..50).map(|_| first.random().uniform(1, 100)).collect();
    let second_rolls: Vec<i32> = (0..50).map(|_| second.random().uniform(1, 100)).collect();
    assert_eq!(first_rolls, second_rolls);

    // Clones draw from the same engine rather than replaying it.
    let replica = KernelContext::load(dir.path()).unwrap();
    let clone = replica.clone();
    let a = replica.sampler().uniform(0, i32::MAX);
    let b = clone.sampler().uniform(0, i32::MAX);
    let fresh = KernelContext::load(dir.path()).unwrap();
    assert_eq!(a, fresh.sampler().uniform(0, i32::MAX));
    assert_eq!(b, fresh.sampler().uniform(0, i32::MAX));
}

#[test]
fn missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let err = ConfigLoader::load(&dir.path().join("config.toml")).unwrap_err();
    assert!(err.to_string().contains("config.toml"), "{err}");
}

#[test]
fn oversize_ceiling_is_refused() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("config.toml"), "max_message_size = 100000\n").unwrap();

    let err = KernelContext::load(dir.path()).unwrap_err();
    assert!(err.to_string().contains("framing limit"), "{err}");
}

#[test]
fn default_context_uses_protocol_defaults() {
    let context = KernelContext::default();
    assert_eq!(
        context.checksum().max_message_size(),
        kernel_core::NETWORK_MESSAGE_MAX_SIZE
    );
    assert_eq!(context.password_scheme(), PasswordScheme::Sha1);
    let stored = PasswordScheme::Sha1.hash("letmein");
    assert!(context.verify_password("letmein", &stored));
}

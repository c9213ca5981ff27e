use crate::server::{
    error::{config::ConfigError, validation::ValidationError},
    validator::signature::{transcript_message, SignatureVerifier},
};
use ed25519_dalek::pkcs8::{spki::der::pem::LineEnding, EncodePublicKey};
use test_utils::archive::{test_verifying_key, SignedArchiveBuilder};

/// Tests loading the trusted key from PEM.
///
/// Expected: Ok with a verifier accepting signatures of the matching private key
#[test]
fn loads_pem_key() {
    let pem = test_verifying_key()
        .to_public_key_pem(LineEnding::LF)
        .unwrap();
    let verifier = SignatureVerifier::from_pem(&pem).unwrap();

    let signature = SignedArchiveBuilder::new().sign(b"hello");

    assert!(verifier.verify(b"hello", signature.as_bytes()).is_ok());
}

/// Tests a PEM document that is not an ed25519 public key.
///
/// Expected: Err(ConfigError::InvalidPublicKey)
#[test]
fn rejects_invalid_pem() {
    let pem = "-----BEGIN PUBLIC KEY-----\nAAAA\n-----END PUBLIC KEY-----";

    let result = SignatureVerifier::from_pem(pem);

    assert!(matches!(result, Err(ConfigError::InvalidPublicKey(_))));
}

/// Tests that trailing whitespace around an encoded signature is tolerated.
///
/// Expected: Ok
#[test]
fn accepts_signature_with_trailing_newline() {
    let verifier = SignatureVerifier::new(test_verifying_key());
    let signature = format!("{}\n", SignedArchiveBuilder::new().sign(b"payload"));

    assert!(verifier.verify(b"payload", signature.as_bytes()).is_ok());
}

/// Tests a signature of the wrong length.
///
/// Expected: Err(ValidationError::ValidationFailed)
#[test]
fn rejects_truncated_signature() {
    let verifier = SignatureVerifier::new(test_verifying_key());
    let signature = SignedArchiveBuilder::new().sign(b"payload");

    let result = verifier.verify(b"payload", &signature.as_bytes()[..40]);

    assert!(matches!(result, Err(ValidationError::ValidationFailed)));
}

/// Tests the message transcript signatures cover.
///
/// Expected: guild id and ticket id prefixed to the body
#[test]
fn builds_transcript_message() {
    assert_eq!(transcript_message(123, 4, b"{}"), b"123|4|{}".to_vec());
}

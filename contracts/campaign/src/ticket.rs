//! # Vote tickets
//!
//! A ticket is an off-chain authorization signed by the campaign's issuer key
//! using Ethereum `personal_sign` rules:
//!
//! ```text
//! digest    = keccak256("\x19Ethereum Signed Message:\n" || len(message) || message)
//! signature = r (32 bytes) || s (32 bytes) || v (1 byte)
//! signer    = keccak256(pubkey_x || pubkey_y)[12..32]
//! ```
//!
//! `len(message)` is the decimal ASCII length. `v` may be given as `0/1` or
//! `27/28`. Signatures the host could not recover from (zero or oversized
//! scalars, high `s`, an `r` off the curve) are screened out by
//! [`curve::is_recoverable`] and count as unauthorized.
//!
//! The digest is the ticket's identity: it is what the consumed-ticket
//! registry and the `voted` event record.

use soroban_sdk::{crypto::Hash, Bytes, BytesN, Env};

use crate::curve;
use crate::Error;

const PERSONAL_SIGN_PREFIX: &[u8] = b"\x19Ethereum Signed Message:\n";

/// Digest the issuer signed for `message`.
pub fn message_hash(env: &Env, message: &Bytes) -> Hash<32> {
    let mut payload = Bytes::from_slice(env, PERSONAL_SIGN_PREFIX);
    append_decimal(&mut payload, message.len());
    payload.append(message);
    env.crypto().keccak256(&payload)
}

fn append_decimal(buf: &mut Bytes, mut n: u32) {
    let mut digits = [0u8; 10];
    let mut start = digits.len();
    loop {
        start -= 1;
        digits[start] = b'0' + (n % 10) as u8;
        n /= 10;
        if n == 0 {
            break;
        }
    }
    buf.extend_from_slice(&digits[start..]);
}

/// Recover the Ethereum-style address that produced `signature` over `digest`.
///
/// Returns `None` when the recovery byte is not one of `0, 1, 27, 28` or the
/// `r || s` part is not recoverable.
pub fn recover_signer(env: &Env, digest: &Hash<32>, signature: &BytesN<65>) -> Option<BytesN<20>> {
    let raw = signature.to_array();
    let recovery_id = match raw[64] {
        v @ 0..=1 => v as u32,
        v @ 27..=28 => (v - 27) as u32,
        _ => return None,
    };

    let mut compact = [0u8; 64];
    compact.copy_from_slice(&raw[..64]);
    if !curve::is_recoverable(&compact) {
        return None;
    }
    let public_key =
        env.crypto()
            .secp256k1_recover(digest, &BytesN::from_array(env, &compact), recovery_id);

    Some(address_of(env, &public_key))
}

/// Ethereum address of an uncompressed SEC1 public key (`0x04 || x || y`).
pub fn address_of(env: &Env, public_key: &BytesN<65>) -> BytesN<20> {
    let encoded = public_key.to_array();
    let digest = env
        .crypto()
        .keccak256(&Bytes::from_slice(env, &encoded[1..]))
        .to_array();

    let mut address = [0u8; 20];
    address.copy_from_slice(&digest[12..]);
    BytesN::from_array(env, &address)
}

/// Check that `signature` over `message` comes from `issuer`.
///
/// Returns the ticket hash on success.
pub fn verify(
    env: &Env,
    message: &Bytes,
    signature: &BytesN<65>,
    issuer: &BytesN<20>,
) -> Result<BytesN<32>, Error> {
    let digest = message_hash(env, message);
    match recover_signer(env, &digest, signature) {
        Some(signer) if signer == *issuer => Ok(digest.to_bytes()),
        _ => Err(Error::UnauthorizedTicket),
    }
}

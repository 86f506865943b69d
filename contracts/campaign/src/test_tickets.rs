//! Fixed secp256k1 tickets for tests.
//!
//! Each ticket is a 20-byte nonce signed with Ethereum `personal_sign`
//! semantics. `ISSUED` tickets come from the key whose address is [`ISSUER`];
//! `FOREIGN` comes from an unrelated key.

use soroban_sdk::{Bytes, BytesN, Env};

pub struct TicketFixture {
    pub message: [u8; 20],
    pub message_hash: [u8; 32],
    pub signature: [u8; 65],
}

impl TicketFixture {
    pub fn message(&self, env: &Env) -> Bytes {
        Bytes::from_slice(env, &self.message)
    }

    pub fn hash(&self, env: &Env) -> BytesN<32> {
        BytesN::from_array(env, &self.message_hash)
    }

    pub fn signature(&self, env: &Env) -> BytesN<65> {
        BytesN::from_array(env, &self.signature)
    }
}

pub const ISSUER: [u8; 20] = [
    0x5c, 0x9f, 0x71, 0xd3, 0xad, 0x17, 0xcb, 0x70, 0x88, 0x74, 0x46, 0x78, 0xf9, 0x8f, 0x74, 0xb2, 0xee, 0xe3, 0x2b, 0xfd,
];

pub const FOREIGN_SIGNER: [u8; 20] = [
    0x9e, 0x6e, 0xfe, 0xfa, 0x3b, 0x5b, 0x73, 0xd5, 0x02, 0x3e, 0xb1, 0x35, 0xde, 0x6d, 0x96, 0x4b, 0x10, 0x1d, 0x85, 0xf5,
];

pub static ISSUED: [TicketFixture; 4] = [
    TicketFixture {
        message: [
            0x6f, 0x1c, 0x3b, 0x0a, 0x9e, 0x24, 0xd5, 0xc8, 0x77, 0x12, 0xaa, 0x40, 0xbe, 0x19, 0xf3, 0xd2, 0x5c, 0x08, 0xe7, 0x61,
        ],
        message_hash: [
            0x1e, 0x75, 0x38, 0x95, 0x5f, 0x8b, 0x54, 0x4d, 0x0f, 0x22, 0x66, 0x49, 0xcf, 0xf5, 0x4c, 0x0e,
            0xf4, 0x4b, 0x5e, 0x47, 0x95, 0xca, 0x61, 0x1d, 0xd4, 0x75, 0x7c, 0x88, 0xf9, 0x61, 0x5e, 0x65,
        ],
        signature: [
            0xb2, 0xcb, 0x6e, 0xb1, 0x91, 0xf4, 0x99, 0xea, 0x86, 0x4f, 0xc7, 0xad, 0xff, 0xf8, 0x87, 0x1e,
            0x4b, 0x7f, 0x60, 0x7b, 0x02, 0xdd, 0x13, 0xb1, 0x51, 0x93, 0x2e, 0x3f, 0x09, 0x5f, 0x34, 0x18,
            0x15, 0x28, 0xe6, 0x5a, 0x25, 0xdc, 0x25, 0xb9, 0x4c, 0x32, 0x11, 0xc6, 0xed, 0x41, 0xee, 0x75,
            0x89, 0xc9, 0xd9, 0x7e, 0x5f, 0xba, 0xb1, 0xc0, 0x07, 0x46, 0x43, 0x95, 0xac, 0x39, 0x19, 0x00,
            0x1c,
        ],
    },
    TicketFixture {
        message: [
            0xa3, 0xb9, 0xe1, 0x77, 0x4c, 0x2d, 0x0f, 0x58, 0x16, 0x6b, 0xe0, 0x93, 0x2a, 0x7d, 0xc4, 0xf1, 0xe8, 0x55, 0x6b, 0x02,
        ],
        message_hash: [
            0x33, 0x19, 0xfd, 0x01, 0xec, 0x91, 0xa5, 0x43, 0x05, 0xa9, 0xab, 0x7e, 0x07, 0xe1, 0xfd, 0x93,
            0xef, 0x60, 0xf0, 0x9a, 0x18, 0x71, 0x07, 0xc0, 0x32, 0x5d, 0x37, 0x0b, 0xc4, 0x08, 0x60, 0x10,
        ],
        signature: [
            0x1d, 0xea, 0x2f, 0xec, 0xa9, 0x5a, 0xa7, 0xbe, 0x18, 0xb5, 0x57, 0x11, 0xe5, 0xa9, 0x20, 0xca,
            0x05, 0xa0, 0xb2, 0xc6, 0xf1, 0xb7, 0x30, 0xb0, 0x15, 0x14, 0x10, 0xa6, 0x33, 0xd0, 0x44, 0x17,
            0x45, 0xa1, 0x03, 0x62, 0xee, 0x1a, 0xf2, 0x9e, 0x56, 0x1c, 0x00, 0x93, 0xd9, 0x5d, 0x51, 0xee,
            0x29, 0x99, 0xd5, 0xc7, 0x81, 0xb8, 0xdb, 0x6a, 0xc1, 0xb0, 0x92, 0xe0, 0x20, 0x5d, 0x11, 0x4b,
            0x1c,
        ],
    },
    TicketFixture {
        message: [
            0x0c, 0x4d, 0x7e, 0xa1, 0x8b, 0x36, 0xf2, 0xe9, 0x5a, 0x11, 0x70, 0xcd, 0x48, 0xbb, 0x23, 0xfe, 0x67, 0x19, 0xd4, 0xa8,
        ],
        message_hash: [
            0x5b, 0xdb, 0xf1, 0x82, 0xc4, 0x9e, 0xd0, 0xc0, 0xee, 0xa0, 0xa9, 0xc5, 0xfa, 0xc2, 0xc8, 0xf4,
            0x33, 0x6e, 0x20, 0xfe, 0x8d, 0x95, 0xbd, 0x77, 0xc1, 0x61, 0x4c, 0xc1, 0xc5, 0x75, 0x14, 0x26,
        ],
        signature: [
            0x4f, 0x3f, 0x38, 0x64, 0xcf, 0xf2, 0x79, 0x27, 0x02, 0xb4, 0x32, 0x46, 0x2a, 0xe4, 0xf7, 0x95,
            0xfd, 0x14, 0x61, 0x9a, 0x5e, 0x9d, 0x50, 0xaa, 0x92, 0x7f, 0x7b, 0x92, 0xd2, 0xfc, 0x2c, 0x25,
            0x50, 0x6d, 0xbf, 0xd7, 0x0f, 0x48, 0xaf, 0x77, 0x57, 0x36, 0xa3, 0x82, 0x46, 0x9b, 0xbd, 0xd4,
            0x5b, 0x4d, 0x12, 0x81, 0x37, 0x4a, 0xa1, 0x28, 0x6a, 0xe9, 0xbd, 0xae, 0xf1, 0xf9, 0xfc, 0x60,
            0x1c,
        ],
    },
    TicketFixture {
        message: [
            0xd8, 0x21, 0x6f, 0x3b, 0xa4, 0x97, 0x0e, 0xc5, 0x5b, 0x1e, 0x2c, 0x84, 0x6f, 0x03, 0xa9, 0xd7, 0xb1, 0xe4, 0xc2, 0x50,
        ],
        message_hash: [
            0xc5, 0x0f, 0x9a, 0x31, 0xa0, 0x76, 0x28, 0xf3, 0xdf, 0xc9, 0x32, 0xe2, 0xf5, 0x09, 0x54, 0xc3,
            0x8a, 0xc6, 0x49, 0xfe, 0x0f, 0x4e, 0xf6, 0xe8, 0x67, 0xb9, 0x8f, 0xcd, 0x9c, 0x55, 0xaa, 0x24,
        ],
        signature: [
            0x79, 0xfa, 0xc2, 0x0e, 0xd8, 0x45, 0xf9, 0x4f, 0x2c, 0x9d, 0xf7, 0x4e, 0x21, 0x35, 0x38, 0xe4,
            0x64, 0x87, 0x88, 0xf0, 0x54, 0x31, 0x3f, 0xdc, 0xfc, 0x01, 0x11, 0x3c, 0x0d, 0x43, 0x77, 0x79,
            0x0c, 0xca, 0x3d, 0xae, 0xd8, 0xc1, 0xfc, 0x91, 0x70, 0xfb, 0x60, 0x71, 0x3c, 0x0d, 0x83, 0xb1,
            0xd1, 0x06, 0xed, 0xf8, 0x8e, 0x20, 0x99, 0x78, 0x0c, 0xdc, 0x79, 0x62, 0xe3, 0xdb, 0xc0, 0x91,
            0x1c,
        ],
    },
];

pub static FOREIGN: TicketFixture = TicketFixture {
    message: [
        0x5e, 0x02, 0xb7, 0xc1, 0xd9, 0x4a, 0x36, 0xf8, 0x7e, 0xc1, 0xb0, 0x32, 0x5a, 0xd6, 0xe9, 0xf4, 0x07, 0x8c, 0x13, 0xba,
    ],
    message_hash: [
        0x72, 0x46, 0x62, 0x9a, 0x77, 0xdf, 0xee, 0x67, 0xf3, 0xdb, 0x0e, 0xf5, 0x16, 0x7e, 0x63, 0xfe,
        0x58, 0xc0, 0x2e, 0x05, 0x6d, 0x25, 0xad, 0x70, 0x9e, 0x77, 0xbd, 0xc3, 0x93, 0x6d, 0x86, 0x5d,
    ],
    signature: [
        0x9b, 0x6f, 0x6e, 0xe8, 0xf6, 0xe4, 0x41, 0xc9, 0xbf, 0x67, 0x00, 0x06, 0x39, 0x40, 0xbf, 0xec,
        0x0c, 0x25, 0xee, 0x47, 0xc1, 0x8d, 0xf6, 0x27, 0x55, 0xf7, 0xf8, 0xf7, 0xb5, 0xd6, 0xc6, 0x96,
        0x4d, 0xb0, 0x0a, 0xd4, 0x45, 0xb3, 0x5b, 0xd0, 0x72, 0x12, 0x91, 0x36, 0x2c, 0xd4, 0xb9, 0x5e,
        0xbb, 0xb1, 0xd4, 0xcb, 0x15, 0x39, 0x61, 0xf3, 0xf1, 0xad, 0xf0, 0xd5, 0x60, 0xaf, 0xe1, 0x58,
        0x1b,
    ],
};

/// `n - s` for `ISSUED[0]`. With `v` flipped this is the high-S twin of that
/// signature: it recovers the same key but is not in canonical form.
pub const ISSUED_0_HIGH_S: [u8; 32] = [
    0xea, 0xd7, 0x19, 0xa5, 0xda, 0x23, 0xda, 0x46, 0xb3, 0xcd, 0xee, 0x39, 0x12, 0xbe, 0x11, 0x89,
    0x30, 0xe5, 0x03, 0x68, 0x4f, 0x8d, 0xee, 0x7b, 0xb8, 0x8c, 0x1a, 0xf7, 0x23, 0xfd, 0x28, 0x41,
];

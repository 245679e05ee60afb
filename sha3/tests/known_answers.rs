use hex_literal::hex;
use k3_keccak::{KeccakF, KeccakState};
use k3_sha3::{
    SHA3_224, SHA3_256, SHA3_384, SHA3_512, SHA3_DOMAIN, keccak256, sha3_224, sha3_256, sha3_384,
    sha3_512,
};
use k3_symmetric::Permutation;

#[test]
fn empty_input() {
    assert_eq!(
        sha3_224(b""),
        hex!("6b4e03423667dbb73b6e15454f0eb1abd4597f9a1b078e3f5b5a6bc7")
    );
    assert_eq!(
        sha3_256(b""),
        hex!("a7ffc6f8bf1ed76651c14756a061d662f580ff4de43b49fa82d80a4b80f8434a")
    );
    assert_eq!(
        sha3_384(b""),
        hex!(
            "
            0c63a75b845e4f7d01107d852e4c2485c51a50aaaa94fc61995e71bbee983a2a
            c3713831264adb47fb6bd1e058d5f004
        "
        )
    );
    assert_eq!(
        sha3_512(b""),
        hex!(
            "
            a69f73cca23a9ac5c8b567dc185a756e97c982164fe25859e0d1dcc1475c80a6
            15b2123af1f5f94c11e3e9402c3ac558f500199d95b6d3e301758586281dcd26
        "
        )
    );
}

#[test]
fn abc() {
    assert_eq!(
        sha3_224(b"abc"),
        hex!("e642824c3f8cf24ad09234ee7d3c766fc9a3a5168d0c94ad73b46fdf")
    );
    assert_eq!(
        sha3_256(b"abc"),
        hex!("3a985da74fe225b2045c172d6bd390bd855f086e3e9d525b46bfe24511431532")
    );
    assert_eq!(
        sha3_384(b"abc"),
        hex!(
            "
            ec01498288516fc926459f58e2c6ad8df9b473cb0fc08c2596da7cf0e49be4b2
            98d88cea927ac7f539f1edf228376d25
        "
        )
    );
    assert_eq!(
        sha3_512(b"abc"),
        hex!(
            "
            b751850b1a57168a5693cd924b6b096e08f621827444f70d884f5d0240d2712e
            10e116e9192af3c91a7ec57647e3934057340b4cf408d5a56592f8274eec53f0
        "
        )
    );
}

#[test]
fn single_zero_byte_sha3_256() {
    assert_eq!(
        sha3_256(&[0x00]),
        hex!("5d53469f20fef4f8eab52b88044ede69c77a6a68a60728609fc4a65ff531e7d0")
    );
}

#[test]
fn two_block_message_sha3_256() {
    assert_eq!(
        sha3_256(b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq"),
        hex!("41c0dba2a9d6240849100376a8235e2c82e1b9998a999e21db32dd97496d3376")
    );
}

#[test]
fn exactly_one_rate_of_zeros() {
    assert_eq!(
        sha3_224(&[0u8; 144]),
        hex!("f2b8486fceee2c6a11a604ce4efe217da854829c2c2dcc9a23758b4d")
    );
    assert_eq!(
        sha3_256(&[0u8; 136]),
        hex!("e772c9cf9eb9c991cdfcf125001b454fdbc0a95f188d1b4c844aa032ad6e075e")
    );
    assert_eq!(
        sha3_384(&[0u8; 104]),
        hex!(
            "
            aaed6beb61b1f9a9b469d38a27a35edde7f676f4603e67f5424c7588043b869e
            bbfcfc3ecee2ae6f5ecfaf7f706c49e3
        "
        )
    );
    assert_eq!(
        sha3_512(&[0u8; 72]),
        hex!(
            "
            f8d76fdd8a082a67eaab47b5518ac486cb9a90dcb9f3c9efcfd86d5c8b3f1831
            601d3c8435f84b9e56da91283d5b98040e6e7b2c8dd9aa5bd4ebdf1823a7cf29
        "
        )
    );
}

/// Messages one byte short of a block put the domain byte and the final bit on the same byte.
#[test]
fn one_byte_short_of_a_rate() {
    assert_eq!(
        sha3_224(&[0xFF; 143]),
        hex!("53613997a7d81661cdb4d87b04ea0378cc93c5035378df0dfbac721e")
    );
    assert_eq!(
        sha3_256(&[0xFF; 135]),
        hex!("efee551716f808257a5ae23251471a4c5df47d6c170e8a875ae87d0bd26d8544")
    );
    assert_eq!(
        sha3_384(&[0xFF; 103]),
        hex!(
            "
            8a4137d96358d2e96d2bc354747372e25c8d0363aebb3a38eea198dffb3d1a8f
            220b881bf43801f7386536cc2bc8dd35
        "
        )
    );
    assert_eq!(
        sha3_512(&[0xFF; 71]),
        hex!(
            "
            bb453cc16e4a1a079e453005ffee140979ae1e477eda70fe1e5e1a7a7e23046c
            090f612d5daba02a6deafe86cbdc4ca7cab61dedece83ff5b97a72aaad3b245c
        "
        )
    );
}

/// An input of exactly one rate is absorbed as a full block, permuted, and followed by a block
/// holding nothing but padding.
#[test]
fn full_block_then_padding_only_block() {
    for config in [SHA3_224, SHA3_256, SHA3_384, SHA3_512] {
        let rate = config.rate();
        let message: Vec<u8> = (0..rate).map(|i| (3 * i + 1) as u8).collect();

        let mut state = KeccakState::new();
        state.as_bytes_mut()[..rate].copy_from_slice(&message);
        KeccakF.permute_mut(&mut state);
        state.xor_byte(0, SHA3_DOMAIN);
        state.xor_byte(rate - 1, 0x80);
        KeccakF.permute_mut(&mut state);
        let expected = &state.as_bytes()[..config.output_len()];

        let mut out = vec![0u8; config.output_len()];
        k3_sha3::keccak_digest_into(&config, &message, &mut out).unwrap();
        assert_eq!(out, expected, "rate {rate}");
    }
}

#[test]
fn keccak256_matches_tiny_keccak() {
    use tiny_keccak::{Hasher, Keccak};

    for len in [0, 1, 135, 136, 137, 1000] {
        let input: Vec<u8> = (0..len).map(|i| i as u8).collect();
        let mut expected = [0u8; 32];
        let mut hasher = Keccak::v256();
        hasher.update(&input);
        hasher.finalize(&mut expected);
        assert_eq!(keccak256(&input), expected, "length {len}");
    }
}

#[cfg(test)]
mod test_sidh {
    use sikep503::protocols::sidh::{derive_secret, KeyVariant, PrivateKey, PublicKey};
    use sikep503::protocols::sidh_parameters::SIKE_P503;

    use rand::rngs::OsRng;

    // Fixed exchange generated with the reference model of this
    // construction: scalars, both public keys and the shared j-invariant.
    static SKA_STR: &str = "0d141b222930373e454c535a61686f767d848b9299a0a7aeb5bcc3cad1d8df02";
    static SKB_STR: &str = "1a21282f363d444b525960676e757c838a91989fa6adb4bbc2c9d0d7dee5ec0b";
    static PKA_STR: &str = "e6a6e90f47dff132b9b126277a0e70cc496f90a58ec7e21db23e8e4b9444b9df507d04c003f7119de5cd9b720e18d86f2244b8eb582c2323eb87a92ed7f51182a26f9f193d89d0fac549889380f81fbfb9b2927de6d379a3dcb86532117f4c29d1ad7b912852869c6d438e369c5f29dc68c4e813ff572ac5a485c6631f17fa551c3abbc2524e59946a6ec927e9a5f64998e543fdb12956d1473f1aa169f8dcf68f16b851c70e4f0370e0c3dfaccd4837170497d17443284ccbda770e34b433e766834a547cd347cf58005ab953f85a0d77b27aa1d90a2d5dbc4a41343003116158efc5cedf1c6cbed5d94b2073cb344675d27cb783a1e77c3bdd5024ab93502825f0af326aa99311323eb2a86669685bdb20f1e33d655ea0f014d3105b202598a4cf2e634909a1c8b08b8e5f3c50267dac7dfd82858f965a4d292608daa8be1c825903c9955615bd374f4f004b0cf49d2fb3291a89ab11e082856ef2f3fe94f3a517fbb09f38de141c7e8abd50f53527cd113d658044ea634d11";
    static PKB_STR: &str = "bb1d4f0b45561ae3410f0faa7e18e2b3527224884ac0c1ab16e1f5cad40aa92ececb6d928462a444d650da4534654a60f065cf1fb5907c51148ccac83cf23d1d11a6d10a5c59ef8ed98e1ed594edb3281de6df042657425e24c55bd3afc92af7cd74e3a3fc0ab8648bdaba4d2f4366b8f0a6249eda097b8ca3029cb891283abcea865b418d8f782e8b0179bad2128619e507f402d6271a0c3a5a4448a9b55645644d8f0b073565fcf684f13ff1548259b370874ff732678c779e9e6a0d8018db7ccdc4747763eefa4431da2e58705935bbbaf0ab68b3aa5ae92f950ad82196da20bb6a26a3efd0f3475720405a85bc9559bd3dd51de814855a82a20541bd8d2e6113520b38f2924ef1aaf7d0ecd9726fc74c646870d18a78a6de671bd4d3f363edd5206f021246ba870c8e72edabc386d3aeb97788c5b4801095323eb46df22f5c427d4f586083979b96f00c9beacc2da0fa4174629d0c76e10e8795f05e8db41fec711fe11abdac0e76b3a90cb13826f89085c68998de8be030";
    static SS_STR: &str = "ad375254997ab39bddd59e005b53450b1b7d33e590b947744093a7bd285b9c8725e60aff78ab0fa56ff20904fc7e39ef44f8f32ef543516def44c88105f711829f4f09c338c6bfed9056946988145e7a48d7638b744f8b4589299f6258775de74bfee2046c0af97d893b6eb263caa27b43d30b245a87670feff42a07b92b";

    #[test]
    fn cross_side_agreement() {
        let mut rng = OsRng;

        for _ in 0..3 {
            let mut alice_prv = PrivateKey::new(KeyVariant::SidhA);
            alice_prv.generate(&mut rng).unwrap();
            let alice_pub = alice_prv.generate_public_key();

            let mut bob_prv = PrivateKey::new(KeyVariant::SidhB);
            bob_prv.generate(&mut rng).unwrap();
            let bob_pub = bob_prv.generate_public_key();

            let alice_secret = derive_secret(&alice_prv, &bob_pub).unwrap();
            let bob_secret = derive_secret(&bob_prv, &alice_pub).unwrap();
            assert_eq!(alice_secret, bob_secret);
            assert_eq!(alice_secret.len(), SIKE_P503.shared_secret_size);
        }
    }

    #[test]
    fn fixed_vector_public_keys_and_shared_secret() {
        let mut alice_prv = PrivateKey::new(KeyVariant::SidhA);
        alice_prv.import(&hex::decode(SKA_STR).unwrap()).unwrap();
        let mut bob_prv = PrivateKey::new(KeyVariant::SidhB);
        bob_prv.import(&hex::decode(SKB_STR).unwrap()).unwrap();

        let alice_pub = alice_prv.generate_public_key();
        assert_eq!(hex::encode(alice_pub.export()), PKA_STR);
        let bob_pub = bob_prv.generate_public_key();
        assert_eq!(hex::encode(bob_pub.export()), PKB_STR);

        let alice_secret = derive_secret(&alice_prv, &bob_pub).unwrap();
        let bob_secret = derive_secret(&bob_prv, &alice_pub).unwrap();
        assert_eq!(hex::encode(&alice_secret), SS_STR);
        assert_eq!(alice_secret, bob_secret);
    }

    #[test]
    fn fixed_vector_survives_wire_round_trip() {
        let mut alice_prv = PrivateKey::new(KeyVariant::SidhA);
        alice_prv.import(&hex::decode(SKA_STR).unwrap()).unwrap();

        let mut bob_pub = PublicKey::new(KeyVariant::SidhB);
        bob_pub.import(&hex::decode(PKB_STR).unwrap()).unwrap();
        assert_eq!(hex::encode(bob_pub.export()), PKB_STR);

        let secret = derive_secret(&alice_prv, &bob_pub).unwrap();
        assert_eq!(hex::encode(secret), SS_STR);
    }

    #[test]
    fn generated_scalars_match_the_keyspace() {
        let mut rng = OsRng;

        // A side: 250-bit scalars, so the top byte keeps 2 low bits with
        // the upper of the two forced; B side: 252 bits, 4 low bits.
        for (variant, bits) in [
            (KeyVariant::SidhA, SIKE_P503.A.secret_bit_len),
            (KeyVariant::SidhB, SIKE_P503.B.secret_bit_len),
        ] {
            for _ in 0..10 {
                let mut prv = PrivateKey::new(variant);
                prv.generate(&mut rng).unwrap();
                let scalar = prv.export();
                let last = *scalar.last().unwrap();
                assert_eq!(last >> (bits % 8), 0);
                assert_eq!((last >> ((bits % 8) - 1)) & 1, 1);
            }
        }
    }

    #[test]
    fn same_side_keys_are_rejected() {
        let mut rng = OsRng;

        let mut a1 = PrivateKey::new(KeyVariant::SidhA);
        a1.generate(&mut rng).unwrap();
        let mut a2 = PrivateKey::new(KeyVariant::SidhA);
        a2.generate(&mut rng).unwrap();
        let pub_a = a2.generate_public_key();
        assert!(derive_secret(&a1, &pub_a).is_err());

        let mut b1 = PrivateKey::new(KeyVariant::SidhB);
        b1.generate(&mut rng).unwrap();
        let mut sike = PrivateKey::new(KeyVariant::Sike);
        sike.generate(&mut rng).unwrap();
        let pub_sike = sike.generate_public_key();
        // A SIKE key is a B-side key, so this pairing is incompatible too.
        assert!(derive_secret(&b1, &pub_sike).is_err());
    }

    #[test]
    fn private_key_wire_round_trip() {
        let mut rng = OsRng;
        for variant in [KeyVariant::SidhA, KeyVariant::SidhB, KeyVariant::Sike] {
            let mut prv = PrivateKey::new(variant);
            prv.generate(&mut rng).unwrap();
            let exported = prv.export();
            assert_eq!(exported.len(), prv.size());

            let mut imported = PrivateKey::new(variant);
            imported.import(&exported).unwrap();
            assert_eq!(imported.export(), exported);

            // Off-by-one lengths must be rejected.
            assert!(imported.import(&exported[..exported.len() - 1]).is_err());
        }
    }
}

#[cfg(test)]
mod test_sike {
    use sikep503::errors::Error;
    use sikep503::protocols::sidh::{KeyVariant, PrivateKey, PublicKey};
    use sikep503::protocols::sidh_parameters::SIKE_P503;
    use sikep503::protocols::sike::{decapsulate, decrypt, encapsulate, encrypt};

    use rand::rngs::OsRng;

    fn sike_keypair() -> (PrivateKey, PublicKey) {
        let mut prv = PrivateKey::new(KeyVariant::Sike);
        prv.generate(&mut OsRng).unwrap();
        let public = prv.generate_public_key();
        (prv, public)
    }

    #[test]
    fn encapsulate_decapsulate_round_trip() {
        let (prv, public) = sike_keypair();

        for _ in 0..2 {
            let (ctext, secret) = encapsulate(&mut OsRng, &public).unwrap();
            assert_eq!(ctext.len(), SIKE_P503.ciphertext_size);
            assert_eq!(secret.len(), SIKE_P503.kem_size);

            let recovered = decapsulate(&prv, &public, &ctext).unwrap();
            assert_eq!(secret, recovered);
        }
    }

    #[test]
    fn tampered_ciphertext_yields_an_unrelated_secret() {
        let (prv, public) = sike_keypair();
        let (ctext, secret) = encapsulate(&mut OsRng, &public).unwrap();

        // Flip one byte in the c1 part, in the public-key part, and in the
        // final byte; decapsulation must keep working and disagree.
        for pos in [
            SIKE_P503.public_key_size,
            0,
            137,
            SIKE_P503.ciphertext_size - 1,
        ] {
            let mut tampered = ctext.clone();
            tampered[pos] ^= 1;
            let bogus = decapsulate(&prv, &public, &tampered).unwrap();
            assert_eq!(bogus.len(), SIKE_P503.kem_size);
            assert_ne!(bogus, secret);
        }
    }

    #[test]
    fn encrypt_decrypt_round_trip() {
        let (prv, public) = sike_keypair();

        let ptext = [0xA5u8; 24];
        let ctext = encrypt(&mut OsRng, &public, &ptext).unwrap();
        assert_eq!(ctext.len(), SIKE_P503.ciphertext_size);

        let decrypted = decrypt(&prv, &ctext).unwrap();
        assert_eq!(decrypted, ptext);
    }

    #[test]
    fn encrypt_rejects_sidh_public_keys() {
        let mut prv_a = PrivateKey::new(KeyVariant::SidhA);
        prv_a.generate(&mut OsRng).unwrap();
        let pub_a = prv_a.generate_public_key();

        let ptext = [0u8; 24];
        assert_eq!(
            encrypt(&mut OsRng, &pub_a, &ptext).unwrap_err(),
            Error::WrongKeyType
        );

        let mut prv_b = PrivateKey::new(KeyVariant::SidhB);
        prv_b.generate(&mut OsRng).unwrap();
        let pub_b = prv_b.generate_public_key();
        assert_eq!(
            encrypt(&mut OsRng, &pub_b, &ptext).unwrap_err(),
            Error::WrongKeyType
        );
    }

    #[test]
    fn encrypt_rejects_bad_plaintext_lengths() {
        let (_, public) = sike_keypair();
        for len in [0usize, 16, 23, 25, 40] {
            let ptext = vec![0u8; len];
            assert_eq!(
                encrypt(&mut OsRng, &public, &ptext).unwrap_err(),
                Error::InvalidInputLength
            );
        }
    }

    #[test]
    fn decapsulate_rejects_bad_ciphertext_lengths() {
        let (prv, public) = sike_keypair();
        let (ctext, _) = encapsulate(&mut OsRng, &public).unwrap();

        for len in [0usize, 1, SIKE_P503.public_key_size, ctext.len() - 1] {
            assert_eq!(
                decapsulate(&prv, &public, &ctext[..len]).unwrap_err(),
                Error::InvalidInputLength
            );
        }
    }

    #[test]
    fn decrypt_requires_a_sike_key() {
        let (_, public) = sike_keypair();
        let (ctext, _) = encapsulate(&mut OsRng, &public).unwrap();

        let mut prv_b = PrivateKey::new(KeyVariant::SidhB);
        prv_b.generate(&mut OsRng).unwrap();
        assert_eq!(decrypt(&prv_b, &ctext).unwrap_err(), Error::WrongKeyType);
    }

    #[test]
    fn public_key_wire_round_trip() {
        let (_, public) = sike_keypair();
        let exported = public.export();
        assert_eq!(exported.len(), public.size());
        assert_eq!(exported.len(), SIKE_P503.public_key_size);

        let mut imported = PublicKey::new(KeyVariant::Sike);
        imported.import(&exported).unwrap();
        assert_eq!(imported.export(), exported);

        assert_eq!(
            imported.import(&exported[..exported.len() - 1]).unwrap_err(),
            Error::InvalidInputLength
        );
    }
}

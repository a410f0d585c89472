#[cfg(test)]
mod test_field_arithmetic {
    use sikep503::fields::fp2::{Fp2, FP_ENCODED_LENGTH};
    use sikep503::utilities::drng::DRNG;

    use rand_core::RngCore;

    /// Uniform-ish element below p: truncating the top byte of each
    /// component to 6 bits keeps it under the 503-bit prime.
    fn rand_fp2(rng: &mut DRNG) -> Fp2 {
        let mut bytes = [0u8; Fp2::ENCODED_LENGTH];
        rng.fill_bytes(&mut bytes);
        bytes[FP_ENCODED_LENGTH - 1] &= 0x3F;
        bytes[2 * FP_ENCODED_LENGTH - 1] &= 0x3F;
        Fp2::decode(&bytes)
    }

    #[test]
    fn add_sub_round_trip() {
        let mut rng = DRNG::from_seed("x + y - y = x".as_bytes());
        for _ in 0..100 {
            let x = rand_fp2(&mut rng);
            let y = rand_fp2(&mut rng);
            assert_eq!(((x + y) - y).equals(&x), u32::MAX);
        }
    }

    #[test]
    fn mul_by_one_is_identity() {
        let mut rng = DRNG::from_seed("x * 1 = x".as_bytes());
        for _ in 0..100 {
            let x = rand_fp2(&mut rng);
            assert_eq!((x * Fp2::ONE).equals(&x), u32::MAX);
        }
    }

    #[test]
    fn invert_mul_is_one() {
        let mut rng = DRNG::from_seed("x * 1/x = 1".as_bytes());
        for _ in 0..25 {
            let x = rand_fp2(&mut rng);
            if x.is_zero() == u32::MAX {
                continue;
            }
            assert_eq!((x * x.invert()).equals(&Fp2::ONE), u32::MAX);
        }
    }

    #[test]
    fn square_matches_self_multiplication() {
        let mut rng = DRNG::from_seed("x^2 = x * x".as_bytes());
        for _ in 0..100 {
            let x = rand_fp2(&mut rng);
            assert_eq!(x.square().equals(&(x * x)), u32::MAX);
        }
    }

    #[test]
    fn batch3_invert_matches_single_inversions() {
        let mut rng = DRNG::from_seed("batch inversion".as_bytes());
        for _ in 0..10 {
            let x = rand_fp2(&mut rng);
            let y = rand_fp2(&mut rng);
            let z = rand_fp2(&mut rng);
            let (ix, iy, iz) = Fp2::batch3_invert(&x, &y, &z);
            assert_eq!(ix.equals(&x.invert()), u32::MAX);
            assert_eq!(iy.equals(&y.invert()), u32::MAX);
            assert_eq!(iz.equals(&z.invert()), u32::MAX);
        }
    }

    #[test]
    fn montgomery_domain_round_trip() {
        // decode enters the Montgomery domain and encode leaves it; the
        // wire bytes must survive unchanged.
        let mut rng = DRNG::from_seed("wire round trip".as_bytes());
        for _ in 0..25 {
            let mut bytes = [0u8; Fp2::ENCODED_LENGTH];
            rng.fill_bytes(&mut bytes);
            bytes[FP_ENCODED_LENGTH - 1] &= 0x3F;
            bytes[2 * FP_ENCODED_LENGTH - 1] &= 0x3F;

            let x = Fp2::decode(&bytes);
            let mut reencoded = [0u8; Fp2::ENCODED_LENGTH];
            x.encode(&mut reencoded);
            assert_eq!(bytes, reencoded);
        }
    }
}

use anchor_lang::prelude::*;
use anchor_lang::solana_program::keccak;

use crate::constants::MERKLE_NODE_LEN;
use crate::errors::TokenpadError;

/// Leaf = keccak(claimer || amount as big-endian bytes)
pub fn claim_leaf(claimer: &Pubkey, amount: u64) -> [u8; 32] {
    keccak::hashv(&[claimer.as_ref(), &amount.to_be_bytes()]).to_bytes()
}

/// Fold a leaf through a flat proof byte stream using sorted-pair hashing.
///
/// At each step the accumulator and the next 32-byte sibling are concatenated
/// with the numerically smaller value first, so the same proof validates
/// regardless of left/right branch position. A proof whose byte length is not
/// an exact multiple of 32 never matches.
pub fn verify_proof(leaf: &[u8; 32], proof: &[u8], root: &[u8; 32]) -> bool {
    if proof.len() % MERKLE_NODE_LEN != 0 {
        return false;
    }

    let mut hash = *leaf;
    let mut buf = [0u8; 64];
    for node in proof.chunks_exact(MERKLE_NODE_LEN) {
        if hash.as_ref() <= node {
            buf[..32].copy_from_slice(&hash);
            buf[32..].copy_from_slice(node);
        } else {
            buf[..32].copy_from_slice(node);
            buf[32..].copy_from_slice(&hash);
        }
        hash = keccak::hash(&buf).to_bytes();
    }
    &hash == root
}

/// Aborting variant used by state-changing claims; malformed proofs get a
/// distinct error from merely invalid ones.
pub fn require_valid_proof(leaf: &[u8; 32], proof: &[u8], root: &[u8; 32]) -> Result<()> {
    require!(
        proof.len() % MERKLE_NODE_LEN == 0,
        TokenpadError::MalformedProof
    );
    require!(verify_proof(leaf, proof, root), TokenpadError::InvalidProof);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parent(a: &[u8; 32], b: &[u8; 32]) -> [u8; 32] {
        let mut buf = [0u8; 64];
        if a <= b {
            buf[..32].copy_from_slice(a);
            buf[32..].copy_from_slice(b);
        } else {
            buf[..32].copy_from_slice(b);
            buf[32..].copy_from_slice(a);
        }
        keccak::hash(&buf).to_bytes()
    }

    /// Build a two-level tree over four (claimer, amount) pairs and return
    /// (root, leaves, sibling paths as flat bytes).
    fn small_tree() -> ([u8; 32], Vec<[u8; 32]>, Vec<Vec<u8>>) {
        let claimers: Vec<Pubkey> = (0..4).map(|_| Pubkey::new_unique()).collect();
        let leaves: Vec<[u8; 32]> = claimers
            .iter()
            .enumerate()
            .map(|(i, c)| claim_leaf(c, (i as u64 + 1) * 100))
            .collect();

        let n01 = parent(&leaves[0], &leaves[1]);
        let n23 = parent(&leaves[2], &leaves[3]);
        let root = parent(&n01, &n23);

        let proofs = vec![
            [leaves[1].as_ref(), n23.as_ref()].concat(),
            [leaves[0].as_ref(), n23.as_ref()].concat(),
            [leaves[3].as_ref(), n01.as_ref()].concat(),
            [leaves[2].as_ref(), n01.as_ref()].concat(),
        ];

        (root, leaves, proofs)
    }

    #[test]
    fn valid_proofs_accept() {
        let (root, leaves, proofs) = small_tree();
        for (leaf, proof) in leaves.iter().zip(&proofs) {
            assert!(verify_proof(leaf, proof, &root));
            assert!(require_valid_proof(leaf, proof, &root).is_ok());
        }
    }

    #[test]
    fn flipped_proof_bit_rejects() {
        let (root, leaves, proofs) = small_tree();
        let mut proof = proofs[0].clone();
        proof[7] ^= 0x01;
        assert!(!verify_proof(&leaves[0], &proof, &root));
    }

    #[test]
    fn flipped_amount_rejects() {
        let (root, _, proofs) = small_tree();
        let wrong_leaf = claim_leaf(&Pubkey::new_unique(), 100);
        assert!(!verify_proof(&wrong_leaf, &proofs[0], &root));
    }

    #[test]
    fn truncated_proof_is_malformed_not_partial() {
        let (root, leaves, proofs) = small_tree();
        let truncated = &proofs[0][..proofs[0].len() - 1];
        assert!(!verify_proof(&leaves[0], truncated, &root));
        let err = require_valid_proof(&leaves[0], truncated, &root).unwrap_err();
        assert_eq!(err, TokenpadError::MalformedProof.into());
    }

    #[test]
    fn empty_proof_only_matches_single_leaf_root() {
        let claimer = Pubkey::new_unique();
        let leaf = claim_leaf(&claimer, 42);
        assert!(verify_proof(&leaf, &[], &leaf));
        assert!(!verify_proof(&leaf, &[], &[0u8; 32]));
    }

    #[test]
    fn amount_is_big_endian_in_leaf() {
        let claimer = Pubkey::new_unique();
        let expected = keccak::hashv(&[claimer.as_ref(), &1u64.to_be_bytes()]).to_bytes();
        assert_eq!(claim_leaf(&claimer, 1), expected);
    }
}

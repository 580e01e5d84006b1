multiversx_sc::imports!();

use crate::errors::*;
use crate::storage;
use crate::types::SignedVote;

pub const DOMAIN_NAME: &[u8] = b"CollectorDAO";
pub const DOMAIN_TYPE: &[u8] =
    b"EIP712Domain(string name,string chainId,address verifyingContract)";
pub const VOTE_TYPE: &[u8] = b"VoteSig(uint64 proposalId,bool support)";
pub const TYPED_DATA_PREFIX: &[u8] = b"\x19\x01";
pub const ED25519_SIGNATURE_LENGTH: usize = 64;

/// Typed-data digests for off-chain votes. The domain binds the digest to
/// this contract's address and the configured chain id, so a signature
/// cannot be replayed against another deployment.
#[multiversx_sc::module]
pub trait SignatureModule: storage::StorageModule {
    fn keccak_of(&self, bytes: &[u8]) -> ManagedByteArray<Self::Api, 32> {
        self.crypto()
            .keccak256(ManagedBuffer::new_from_bytes(bytes))
    }

    fn domain_separator(&self) -> ManagedByteArray<Self::Api, 32> {
        let mut encoded = ManagedBuffer::new();
        encoded.append(self.keccak_of(DOMAIN_TYPE).as_managed_buffer());
        encoded.append(self.keccak_of(DOMAIN_NAME).as_managed_buffer());
        encoded.append(
            self.crypto()
                .keccak256(self.chain_id().get())
                .as_managed_buffer(),
        );
        encoded.append(self.blockchain().get_sc_address().as_managed_buffer());
        self.crypto().keccak256(&encoded)
    }

    fn vote_struct_hash(&self, proposal_id: u64, support: bool) -> ManagedByteArray<Self::Api, 32> {
        let mut encoded = ManagedBuffer::new();
        encoded.append(self.keccak_of(VOTE_TYPE).as_managed_buffer());
        encoded.append_bytes(&proposal_id.to_be_bytes());
        encoded.append_bytes(&[support as u8]);
        self.crypto().keccak256(&encoded)
    }

    #[view(getVoteDigest)]
    fn vote_digest(&self, proposal_id: u64, support: bool) -> ManagedBuffer {
        let mut preimage = ManagedBuffer::new_from_bytes(TYPED_DATA_PREFIX);
        preimage.append(self.domain_separator().as_managed_buffer());
        preimage.append(
            self.vote_struct_hash(proposal_id, support)
                .as_managed_buffer(),
        );
        self.crypto().keccak256(&preimage).as_managed_buffer().clone()
    }

    /// Returns the voter once the signature checks out. The VM fails the
    /// transaction if the Ed25519 check does not pass.
    fn verified_signer(&self, signed_vote: &SignedVote<Self::Api>) -> ManagedAddress {
        require!(
            signed_vote.signature.len() == ED25519_SIGNATURE_LENGTH,
            ERR_VOTE_REJECTED
        );

        let digest = self.vote_digest(signed_vote.proposal_id, signed_vote.support);
        self.crypto().verify_ed25519(
            signed_vote.voter.as_managed_buffer(),
            &digest,
            &signed_vote.signature,
        );

        signed_vote.voter.clone()
    }
}

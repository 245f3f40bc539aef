use soroban_sdk::{contractclient, Address, Env};

/// Ownership interface the contract expects from an asset contract.
#[allow(dead_code)]
#[contractclient(name = "NonFungibleClient")]
pub trait NonFungible {
    fn owner_of(env: Env, token_id: u128) -> Address;

    fn get_approved(env: Env, token_id: u128) -> Option<Address>;

    fn is_approved_for_all(env: Env, owner: Address, operator: Address) -> bool;

    /// Moves an asset owned by `from`; requires `from` to authorize.
    fn transfer(env: Env, from: Address, to: Address, token_id: u128);

    /// Moves an asset on behalf of `from`; `spender` must be approved.
    fn transfer_from(env: Env, spender: Address, from: Address, to: Address, token_id: u128);
}

/// True when `operator` may move `token_id` for `owner`, through either a
/// blanket operator approval or an approval for this asset alone.
pub fn is_transfer_approved(
    nft: &NonFungibleClient,
    owner: &Address,
    operator: &Address,
    token_id: u128,
) -> bool {
    if nft.is_approved_for_all(owner, operator) {
        return true;
    }
    nft.get_approved(&token_id).as_ref() == Some(operator)
}

/// Pulls the asset from `seller` into the contract's custody.
pub fn take_custody(env: &Env, nft: &Address, seller: &Address, token_id: u128) {
    let custodian = env.current_contract_address();
    NonFungibleClient::new(env, nft).transfer_from(&custodian, seller, &custodian, &token_id);
}

/// Hands an asset held in custody to `to`.
pub fn release_custody(env: &Env, nft: &Address, to: &Address, token_id: u128) {
    NonFungibleClient::new(env, nft).transfer(&env.current_contract_address(), to, &token_id);
}


use crate::{DutchAuctionContract, DutchAuctionContractClient};
use soroban_sdk::{
    contract, contractimpl, contracttype,
    testutils::{Address as _, Events, Ledger},
    token, Address, Env, Val, Vec,
};

pub const START_TIME: u64 = 1_000;
pub const TOKEN_ID: u128 = 7;

// ─── mock asset contract ────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone)]
pub enum NftKey {
    Owner(u128),
    Approved(u128),
    Operator(Address, Address),
    Frozen,
}

/// Minimal ERC-721 style asset contract. `set_frozen(true)` makes every
/// transfer trap.
#[contract]
pub struct MockNft;

#[contractimpl]
impl MockNft {
    pub fn mint(env: Env, to: Address, token_id: u128) {
        env.storage().persistent().set(&NftKey::Owner(token_id), &to);
    }

    pub fn owner_of(env: Env, token_id: u128) -> Address {
        env.storage()
            .persistent()
            .get(&NftKey::Owner(token_id))
            .expect("token not minted")
    }

    pub fn approve(env: Env, owner: Address, approved: Address, token_id: u128) {
        owner.require_auth();
        env.storage()
            .persistent()
            .set(&NftKey::Approved(token_id), &approved);
    }

    pub fn get_approved(env: Env, token_id: u128) -> Option<Address> {
        env.storage().persistent().get(&NftKey::Approved(token_id))
    }

    pub fn set_approval_for_all(env: Env, owner: Address, operator: Address, approved: bool) {
        owner.require_auth();
        env.storage()
            .persistent()
            .set(&NftKey::Operator(owner, operator), &approved);
    }

    pub fn is_approved_for_all(env: Env, owner: Address, operator: Address) -> bool {
        env.storage()
            .persistent()
            .get(&NftKey::Operator(owner, operator))
            .unwrap_or(false)
    }

    pub fn set_frozen(env: Env, frozen: bool) {
        env.storage().instance().set(&NftKey::Frozen, &frozen);
    }

    pub fn transfer(env: Env, from: Address, to: Address, token_id: u128) {
        from.require_auth();
        move_token(&env, &from, &to, token_id);
    }

    pub fn transfer_from(env: Env, spender: Address, from: Address, to: Address, token_id: u128) {
        spender.require_auth();
        let approved = Self::is_approved_for_all(env.clone(), from.clone(), spender.clone())
            || Self::get_approved(env.clone(), token_id) == Some(spender);
        if !approved {
            panic!("spender not approved");
        }
        move_token(&env, &from, &to, token_id);
    }
}

fn move_token(env: &Env, from: &Address, to: &Address, token_id: u128) {
    let frozen: bool = env
        .storage()
        .instance()
        .get(&NftKey::Frozen)
        .unwrap_or(false);
    if frozen {
        panic!("transfers frozen");
    }
    let owner: Address = env
        .storage()
        .persistent()
        .get(&NftKey::Owner(token_id))
        .expect("token not minted");
    if owner != *from {
        panic!("not owner");
    }
    env.storage().persistent().set(&NftKey::Owner(token_id), to);
    env.storage().persistent().remove(&NftKey::Approved(token_id));
}

// ─── fixtures ───────────────────────────────────────────────────────────────

pub struct TestContext {
    pub env: Env,
    pub client: DutchAuctionContractClient<'static>,
    pub contract_id: Address,
    pub admin: Address,
    pub seller: Address,
    pub buyer: Address,
    pub nft: MockNftClient<'static>,
    pub token: token::TokenClient<'static>,
}

/// Deploys the auction contract, a mock asset contract and a payment token.
/// The seller owns `TOKEN_ID` and has approved the auction contract as an
/// operator; seller and buyer each hold 10_000_000 payment units.
pub fn setup_test() -> TestContext {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().set_timestamp(START_TIME);

    let contract_id = env.register(DutchAuctionContract, ());
    let client = DutchAuctionContractClient::new(&env, &contract_id);

    let admin = Address::generate(&env);
    let seller = Address::generate(&env);
    let buyer = Address::generate(&env);

    let token_admin = Address::generate(&env);
    let token_contract = env.register_stellar_asset_contract_v2(token_admin);
    let token_address = token_contract.address();
    let token_client = token::TokenClient::new(&env, &token_address);
    let token_admin_client = token::StellarAssetClient::new(&env, &token_address);
    token_admin_client.mint(&seller, &10_000_000);
    token_admin_client.mint(&buyer, &10_000_000);

    let nft_id = env.register(MockNft, ());
    let nft = MockNftClient::new(&env, &nft_id);
    nft.mint(&seller, &TOKEN_ID);
    nft.set_approval_for_all(&seller, &contract_id, &true);

    client.initialize(&admin, &token_address);

    TestContext {
        env,
        client,
        contract_id,
        admin,
        seller,
        buyer,
        nft,
        token: token_client,
    }
}

/// Opens the reference auction: 100 down to 50 over 100 seconds.
pub fn create_default_auction(ctx: &TestContext) -> u64 {
    ctx.client
        .create_auction(&ctx.seller, &ctx.nft.address, &TOKEN_ID, &100, &50, &100)
}

/// Mints `token_id` to `owner` and approves the auction contract for it.
pub fn mint_approved(ctx: &TestContext, owner: &Address, token_id: u128) {
    ctx.nft.mint(owner, &token_id);
    ctx.nft.approve(owner, &ctx.contract_id, &token_id);
}

pub fn advance_ledger(env: &Env, seconds: u64) {
    env.ledger().set_timestamp(env.ledger().timestamp() + seconds);
}

/// Events the auction contract published during the last invocation.
pub fn contract_events(ctx: &TestContext) -> Vec<(Address, Vec<Val>, Val)> {
    let mut own = Vec::new(&ctx.env);
    for event in ctx.env.events().all().iter() {
        if event.0 == ctx.contract_id {
            own.push_back(event);
        }
    }
    own
}

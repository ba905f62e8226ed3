use soroban_sdk::{
    contract, contractclient, contractimpl, contracttype,
    token::{StellarAssetClient, TokenClient},
    Address, Env, Symbol,
};

#[derive(Clone)]
#[contracttype]
pub struct BridgeRequest {
    pub requester: Address,
    pub redeem: bool,
    pub amount: i128,
}

#[derive(Clone)]
#[contracttype]
pub enum BridgeKey {
    Request(u64),
}

const STABLE_KEY: &str = "Stable";
const RECEIPT_KEY: &str = "Receipt";
const NEXT_ID_KEY: &str = "NextId";

#[contractclient(name = "SettlementReceiverClient")]
pub trait SettlementReceiver {
    fn on_settle(e: Env, caller: Address, id: u64, amount: i128);
}

/// Bridge settling requests when the test calls `settle`
///
/// The bridge must be the admin of the receipt token so it can mint it.
#[contract]
pub struct MockBridge;

#[contractimpl]
impl MockBridge {
    pub fn __constructor(e: Env, stable_token: Address, receipt_token: Address) {
        e.storage().instance().set(&Symbol::new(&e, STABLE_KEY), &stable_token);
        e.storage().instance().set(&Symbol::new(&e, RECEIPT_KEY), &receipt_token);
    }

    pub fn deposit_stable(e: Env, from: Address, amount: i128) -> u64 {
        from.require_auth();
        TokenClient::new(&e, &address(&e, STABLE_KEY)).transfer(&from, &e.current_contract_address(), &amount);
        push_request(&e, from, false, amount)
    }

    pub fn redeem_stable(e: Env, from: Address, amount: i128) -> u64 {
        from.require_auth();
        TokenClient::new(&e, &address(&e, RECEIPT_KEY)).transfer(&from, &e.current_contract_address(), &amount);
        push_request(&e, from, true, amount)
    }

    pub fn request(e: Env, id: u64) -> Option<BridgeRequest> {
        e.storage().persistent().get(&BridgeKey::Request(id))
    }

    /// Deliver `amount_out` for request `id` and notify the requester
    ///
    /// Deposits are paid in minted receipt tokens, redemptions in stable
    /// tokens the bridge must hold.
    pub fn settle(e: Env, id: u64, amount_out: i128) {
        let key = BridgeKey::Request(id);
        let request: BridgeRequest = e.storage().persistent().get(&key).unwrap();
        e.storage().persistent().remove(&key);

        let this = e.current_contract_address();
        if request.redeem {
            TokenClient::new(&e, &address(&e, STABLE_KEY)).transfer(&this, &request.requester, &amount_out);
        } else {
            StellarAssetClient::new(&e, &address(&e, RECEIPT_KEY)).mint(&request.requester, &amount_out);
        }
        SettlementReceiverClient::new(&e, &request.requester).on_settle(&this, &id, &amount_out);
    }
}

fn address(e: &Env, key: &str) -> Address {
    e.storage().instance().get(&Symbol::new(e, key)).unwrap()
}

fn push_request(e: &Env, requester: Address, redeem: bool, amount: i128) -> u64 {
    let id: u64 = e.storage().instance().get(&Symbol::new(e, NEXT_ID_KEY)).unwrap_or(1);
    e.storage().instance().set(&Symbol::new(e, NEXT_ID_KEY), &(id + 1));
    e.storage().persistent().set(
        &BridgeKey::Request(id),
        &BridgeRequest {
            requester,
            redeem,
            amount,
        },
    );
    id
}

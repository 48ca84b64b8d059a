// Scenario tests for the endpoints that end in a call to the Stake
// Authority or the Action Executor. Both are replaced by the mock
// contracts under `mocks/`, registered next to the pool.

use action_executor_mock::action_executor_mock_proxy::ActionExecutorMockProxy;
use multiversx_sc_scenario::imports::*;
use petting_pool::petting_pool_proxy::PettingPoolProxy;
use stake_authority_mock::stake_authority_mock_proxy::StakeAuthorityMockProxy;

const POOL_CODE: MxscPath = MxscPath::new("output/petting-pool.mxsc.json");
const AUTHORITY_CODE: MxscPath =
    MxscPath::new("mocks/stake-authority-mock/output/stake-authority-mock.mxsc.json");
const EXECUTOR_CODE: MxscPath =
    MxscPath::new("mocks/action-executor-mock/output/action-executor-mock.mxsc.json");

const OWNER: TestAddress = TestAddress::new("owner");
const USER: TestAddress = TestAddress::new("user");
const OTHER_USER: TestAddress = TestAddress::new("other-user");

const POOL: TestSCAddress = TestSCAddress::new("petting-pool");
const AUTHORITY: TestSCAddress = TestSCAddress::new("stake-authority");
const EXECUTOR: TestSCAddress = TestSCAddress::new("action-executor");

const GHST_ID: &str = "GHST-123456";
const TICKET_ID: &str = "TICKET-123456";
const GHST: TestTokenIdentifier = TestTokenIdentifier::new(GHST_ID);

const STAKE_AMOUNT: u64 = 100;
const STAKE_FEE: u64 = 2;
const NET_STAKE: u64 = STAKE_AMOUNT - STAKE_FEE;

fn world() -> ScenarioWorld {
    let mut blockchain = ScenarioWorld::new();

    blockchain.register_contract(POOL_CODE, petting_pool::ContractBuilder);
    blockchain.register_contract(AUTHORITY_CODE, stake_authority_mock::ContractBuilder);
    blockchain.register_contract(EXECUTOR_CODE, action_executor_mock::ContractBuilder);
    blockchain
}

fn managed(address: Address) -> ManagedAddress<StaticApi> {
    ManagedAddress::from(address)
}

fn token_id(name: &str) -> TokenIdentifier<StaticApi> {
    TokenIdentifier::from(name)
}

/// Mocks and pool deployed; each user holds exactly one stake's worth of GHST.
fn setup() -> ScenarioWorld {
    let mut world = world();

    world.account(OWNER).nonce(1);
    world.account(USER).nonce(1).esdt_balance(GHST, STAKE_AMOUNT);
    world.account(OTHER_USER).nonce(1).esdt_balance(GHST, STAKE_AMOUNT);

    world
        .tx()
        .from(OWNER)
        .typed(StakeAuthorityMockProxy)
        .init()
        .code(AUTHORITY_CODE)
        .new_address(AUTHORITY)
        .run();

    world
        .tx()
        .from(OWNER)
        .typed(ActionExecutorMockProxy)
        .init()
        .code(EXECUTOR_CODE)
        .new_address(EXECUTOR)
        .run();

    world
        .tx()
        .from(OWNER)
        .typed(PettingPoolProxy)
        .init(
            managed(AUTHORITY.to_address()),
            managed(EXECUTOR.to_address()),
            token_id(GHST_ID),
            token_id(TICKET_ID),
            BigUint::<StaticApi>::from(STAKE_AMOUNT),
            BigUint::<StaticApi>::from(STAKE_FEE),
        )
        .code(POOL_CODE)
        .code_metadata(CodeMetadata::PAYABLE_BY_SC)
        .new_address(POOL)
        .run();

    world
}

fn approve_spend(world: &mut ScenarioWorld) {
    world
        .tx()
        .from(OWNER)
        .to(POOL)
        .typed(PettingPoolProxy)
        .approve_fungible_spend()
        .run();
}

fn stake(world: &mut ScenarioWorld, who: TestAddress) {
    world
        .tx()
        .from(who)
        .to(POOL)
        .typed(PettingPoolProxy)
        .stake()
        .single_esdt(&token_id(GHST_ID), 0, &BigUint::<StaticApi>::from(STAKE_AMOUNT))
        .run();
}

fn dispatch(world: &mut ScenarioWorld, ids: &[u64]) {
    let mut batch = MultiValueEncoded::<StaticApi, u64>::new();
    for id in ids {
        batch.push(*id);
    }
    world
        .tx()
        .from(OWNER)
        .to(POOL)
        .typed(PettingPoolProxy)
        .dispatch(batch)
        .run();
}

fn set_operator_approval(world: &mut ScenarioWorld, who: TestAddress, approved: bool) {
    world
        .tx()
        .from(who)
        .to(EXECUTOR)
        .typed(ActionExecutorMockProxy)
        .set_approval_for_all(managed(POOL.to_address()), approved)
        .run();
}

// `isEligible` and `getFrens` read other contracts, so they run as transactions.
fn is_eligible(world: &mut ScenarioWorld, who: TestAddress) -> bool {
    world
        .tx()
        .from(OWNER)
        .to(POOL)
        .typed(PettingPoolProxy)
        .is_eligible(managed(who.to_address()))
        .returns(ReturnsResult)
        .run()
}

fn lifetime_pets(world: &mut ScenarioWorld) -> u64 {
    world
        .query()
        .to(POOL)
        .typed(PettingPoolProxy)
        .lifetime_pets()
        .returns(ReturnsResult)
        .run()
}

fn last_batch(world: &mut ScenarioWorld) -> Vec<u64> {
    let batch = world
        .query()
        .to(EXECUTOR)
        .typed(ActionExecutorMockProxy)
        .last_batch()
        .returns(ReturnsResult)
        .run();
    batch.iter().collect()
}

// ============================================================
// Stake / unstake through the Stake Authority
// ============================================================

#[test]
fn test_stake_forwards_net_to_authority() {
    let mut world = setup();
    approve_spend(&mut world);

    stake(&mut world, USER);

    world.check_account(USER).esdt_balance(GHST, 0u64);
    world.check_account(POOL).esdt_balance(GHST, STAKE_FEE);
    world.check_account(AUTHORITY).esdt_balance(GHST, NET_STAKE);

    world
        .query()
        .to(AUTHORITY)
        .typed(StakeAuthorityMockProxy)
        .staked(managed(POOL.to_address()))
        .returns(ExpectValue(BigUint::<StaticApi>::from(NET_STAKE)))
        .run();

    let frens = world
        .tx()
        .from(OWNER)
        .to(POOL)
        .typed(PettingPoolProxy)
        .get_frens()
        .returns(ReturnsResult)
        .run();
    assert_eq!(frens, BigUint::<StaticApi>::from(NET_STAKE));

    world
        .query()
        .to(POOL)
        .typed(PettingPoolProxy)
        .is_member(managed(USER.to_address()))
        .returns(ExpectValue(true))
        .run();
    world
        .query()
        .to(POOL)
        .typed(PettingPoolProxy)
        .stake_balance(managed(USER.to_address()))
        .returns(ExpectValue(BigUint::<StaticApi>::from(NET_STAKE)))
        .run();
}

#[test]
fn test_unstake_returns_principal_to_caller() {
    let mut world = setup();
    approve_spend(&mut world);
    stake(&mut world, USER);

    world
        .tx()
        .from(USER)
        .to(POOL)
        .typed(PettingPoolProxy)
        .unstake()
        .run();

    // Principal comes back from the authority; only the fee is lost.
    world.check_account(USER).esdt_balance(GHST, NET_STAKE);
    world.check_account(AUTHORITY).esdt_balance(GHST, 0u64);
    world.check_account(POOL).esdt_balance(GHST, STAKE_FEE);

    world
        .query()
        .to(POOL)
        .typed(PettingPoolProxy)
        .is_member(managed(USER.to_address()))
        .returns(ExpectValue(false))
        .run();

    world
        .tx()
        .from(OWNER)
        .to(POOL)
        .typed(PettingPoolProxy)
        .withdraw_fees(managed(OWNER.to_address()))
        .run();

    world.check_account(OWNER).esdt_balance(GHST, STAKE_FEE);
    world.check_account(POOL).esdt_balance(GHST, 0u64);
}

#[test]
fn test_round_trip_can_stake_again() {
    let mut world = setup();
    approve_spend(&mut world);
    stake(&mut world, OTHER_USER);

    world
        .tx()
        .from(OTHER_USER)
        .to(POOL)
        .typed(PettingPoolProxy)
        .unstake()
        .run();

    // 98 left is below the fixed amount.
    world
        .tx()
        .from(OTHER_USER)
        .to(POOL)
        .typed(PettingPoolProxy)
        .stake()
        .single_esdt(&token_id(GHST_ID), 0, &BigUint::<StaticApi>::from(NET_STAKE))
        .returns(ExpectError(4, "Stake must equal the fixed stake amount"))
        .run();

    world.check_account(OTHER_USER).esdt_balance(GHST, NET_STAKE);
    world.check_account(AUTHORITY).esdt_balance(GHST, 0u64);
}

#[test]
fn test_stake_before_spend_approval_moves_nothing() {
    let mut world = setup();

    world
        .tx()
        .from(USER)
        .to(POOL)
        .typed(PettingPoolProxy)
        .stake()
        .single_esdt(&token_id(GHST_ID), 0, &BigUint::<StaticApi>::from(STAKE_AMOUNT))
        .returns(ExpectError(4, "Stake authority spend not approved"))
        .run();

    world.check_account(USER).esdt_balance(GHST, STAKE_AMOUNT);
    world.check_account(AUTHORITY).esdt_balance(GHST, 0u64);
}

// ============================================================
// Dispatch through the Action Executor
// ============================================================

#[test]
fn test_dispatch_forwards_ids_unchanged() {
    let mut world = setup();

    dispatch(&mut world, &[101, 102, 103]);
    assert_eq!(lifetime_pets(&mut world), 3);
    assert_eq!(last_batch(&mut world), vec![101, 102, 103]);

    // Duplicates go through as sent.
    dispatch(&mut world, &[7, 7]);
    assert_eq!(lifetime_pets(&mut world), 5);
    assert_eq!(last_batch(&mut world), vec![7, 7]);

    dispatch(&mut world, &[]);
    assert_eq!(lifetime_pets(&mut world), 5);
    assert!(last_batch(&mut world).is_empty());

    world
        .query()
        .to(EXECUTOR)
        .typed(ActionExecutorMockProxy)
        .interaction_count()
        .returns(ExpectValue(3u64))
        .run();
}

#[test]
fn test_dispatch_by_non_owner_reaches_no_executor() {
    let mut world = setup();

    let mut batch = MultiValueEncoded::<StaticApi, u64>::new();
    batch.push(1u64);
    world
        .tx()
        .from(USER)
        .to(POOL)
        .typed(PettingPoolProxy)
        .dispatch(batch)
        .returns(ExpectError(4, "Endpoint can only be called by owner"))
        .run();

    assert_eq!(lifetime_pets(&mut world), 0);
    world
        .query()
        .to(EXECUTOR)
        .typed(ActionExecutorMockProxy)
        .interaction_count()
        .returns(ExpectValue(0u64))
        .run();
}

// ============================================================
// Eligibility: local stake plus live operator approval
// ============================================================

#[test]
fn test_eligibility_follows_operator_approval() {
    let mut world = setup();
    approve_spend(&mut world);
    stake(&mut world, USER);

    // Staked, but the executor has no approval on record.
    assert!(!is_eligible(&mut world, USER));

    set_operator_approval(&mut world, USER, true);
    assert!(is_eligible(&mut world, USER));

    // Revoked outside the pool; nothing is cached.
    set_operator_approval(&mut world, USER, false);
    assert!(!is_eligible(&mut world, USER));
}

#[test]
fn test_approval_without_stake_is_not_eligible() {
    let mut world = setup();
    approve_spend(&mut world);

    set_operator_approval(&mut world, OTHER_USER, true);
    assert!(!is_eligible(&mut world, OTHER_USER));

    stake(&mut world, OTHER_USER);
    assert!(is_eligible(&mut world, OTHER_USER));

    world
        .tx()
        .from(OTHER_USER)
        .to(POOL)
        .typed(PettingPoolProxy)
        .unstake()
        .run();
    assert!(!is_eligible(&mut world, OTHER_USER));
}

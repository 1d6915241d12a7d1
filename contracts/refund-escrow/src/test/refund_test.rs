use crate::test::{setup_test, setup_with_config, INITIAL_BALANCE};
use crate::{EscrowConfig, EscrowState, Error};

#[test]
fn test_refund_scenario() {
    let ctx = setup_test();
    let investor = ctx.whitelisted_investor(100);

    ctx.client.deposit(&investor, &100);
    assert_eq!(ctx.client.deposits_of(&investor), 100);
    assert_eq!(
        ctx.client.try_deposit(&investor, &100),
        Err(Ok(Error::AlreadyInvested))
    );

    ctx.client.close(&ctx.primary);
    assert_eq!(ctx.client.state(), EscrowState::Closed);
    ctx.client.enable_refunds(&ctx.primary);
    assert_eq!(ctx.client.state(), EscrowState::Refunding);

    let paid = ctx.client.withdraw(&investor);
    assert_eq!(paid, 100);
    assert_eq!(ctx.client.deposits_of(&investor), 0);
    assert_eq!(ctx.client.total_deposited(), 0);
    assert_eq!(ctx.token.balance(&investor), INITIAL_BALANCE);
    assert_eq!(ctx.client.total_balance(), 0);
}

#[test]
fn test_withdraw_twice_pays_once() {
    let ctx = setup_test();
    let investor = ctx.whitelisted_investor(100);
    ctx.client.deposit(&investor, &100);
    ctx.client.close(&ctx.primary);
    ctx.client.enable_refunds(&ctx.primary);

    assert_eq!(ctx.client.withdraw(&investor), 100);
    assert_eq!(ctx.client.withdraw(&investor), 0);
    assert_eq!(ctx.token.balance(&investor), INITIAL_BALANCE);
}

#[test]
fn test_withdraw_only_when_refunding() {
    let ctx = setup_test();
    let investor = ctx.whitelisted_investor(100);
    ctx.client.deposit(&investor, &100);

    assert_eq!(
        ctx.client.try_withdraw(&investor),
        Err(Ok(Error::WithdrawalNotAllowed))
    );

    ctx.client.close(&ctx.primary);
    assert_eq!(
        ctx.client.try_withdraw(&investor),
        Err(Ok(Error::WithdrawalNotAllowed))
    );

    ctx.client.enable_released(&ctx.primary);
    assert_eq!(
        ctx.client.try_withdraw(&investor),
        Err(Ok(Error::WithdrawalNotAllowed))
    );

    assert_eq!(ctx.client.deposits_of(&investor), 100);
    assert_eq!(ctx.client.total_balance(), 100);
}

#[test]
fn test_refund_all_zeroes_deposits() {
    let ctx = setup_test();
    let alice = ctx.whitelisted_investor(100);
    let bob = ctx.whitelisted_investor(300);
    ctx.client.deposit(&alice, &100);
    ctx.client.deposit(&bob, &300);

    ctx.client.close(&ctx.primary);
    ctx.client.enable_refunds(&ctx.primary);

    let total = ctx.client.refund_all(&ctx.primary);
    assert_eq!(total, 400);

    assert_eq!(ctx.token.balance(&alice), INITIAL_BALANCE);
    assert_eq!(ctx.token.balance(&bob), INITIAL_BALANCE);
    assert_eq!(ctx.client.deposits_of(&alice), 0);
    assert_eq!(ctx.client.deposits_of(&bob), 0);
    assert_eq!(ctx.client.total_deposited(), 0);
    assert_eq!(ctx.client.total_balance(), 0);

    // Nothing left to pay on a second pass or an individual withdraw
    assert_eq!(ctx.client.refund_all(&ctx.primary), 0);
    assert_eq!(ctx.client.withdraw(&alice), 0);
    assert_eq!(ctx.token.balance(&alice), INITIAL_BALANCE);
}

#[test]
fn test_refund_all_legacy_keeps_deposits() {
    let ctx = setup_with_config(EscrowConfig {
        zero_deposits_on_refund: false,
    });
    let alice = ctx.whitelisted_investor(100);
    let bob = ctx.whitelisted_investor(300);
    ctx.client.deposit(&alice, &100);
    ctx.client.deposit(&bob, &300);

    ctx.client.close(&ctx.primary);
    ctx.client.enable_refunds(&ctx.primary);

    assert_eq!(ctx.client.refund_all(&ctx.primary), 400);
    assert_eq!(ctx.token.balance(&alice), INITIAL_BALANCE);
    assert_eq!(ctx.token.balance(&bob), INITIAL_BALANCE);
    assert_eq!(ctx.client.total_balance(), 0);

    // Recorded amounts are left in place
    assert_eq!(ctx.client.deposits_of(&alice), 100);
    assert_eq!(ctx.client.deposits_of(&bob), 300);
    assert_eq!(ctx.client.total_deposited(), 400);

    // A second payout has nothing to draw on and the whole call rolls back
    assert!(ctx.client.try_refund_all(&ctx.primary).is_err());
    assert!(ctx.client.try_withdraw(&alice).is_err());
    assert_eq!(ctx.client.deposits_of(&alice), 100);
    assert_eq!(ctx.token.balance(&alice), INITIAL_BALANCE);
}

#[test]
fn test_refund_all_requires_refunding() {
    let ctx = setup_test();
    let investor = ctx.whitelisted_investor(100);
    ctx.client.deposit(&investor, &100);

    assert_eq!(
        ctx.client.try_refund_all(&ctx.primary),
        Err(Ok(Error::InvalidState))
    );

    ctx.client.close(&ctx.primary);
    ctx.client.enable_released(&ctx.primary);
    assert_eq!(
        ctx.client.try_refund_all(&ctx.primary),
        Err(Ok(Error::InvalidState))
    );
    assert_eq!(ctx.client.deposits_of(&investor), 100);
}

#[test]
fn test_refund_all_is_primary_only() {
    let ctx = setup_test();
    let investor = ctx.whitelisted_investor(100);
    ctx.client.deposit(&investor, &100);
    ctx.client.close(&ctx.primary);
    ctx.client.enable_refunds(&ctx.primary);

    let res = ctx.client.try_refund_all(&investor);
    assert_eq!(res, Err(Ok(Error::Unauthorized)));
    assert_eq!(ctx.client.total_balance(), 100);
}

#[test]
fn test_release_scenario() {
    let ctx = setup_test();
    let alice = ctx.whitelisted_investor(100);
    let bob = ctx.whitelisted_investor(250);
    ctx.client.deposit(&alice, &100);
    ctx.client.deposit(&bob, &250);

    ctx.client.close(&ctx.primary);
    ctx.client.enable_released(&ctx.primary);
    assert_eq!(ctx.client.state(), EscrowState::Released);

    let paid = ctx.client.beneficiary_withdraw();
    assert_eq!(paid, 350);
    assert_eq!(ctx.token.balance(&ctx.beneficiary), 350);
    assert_eq!(ctx.client.total_balance(), 0);

    // Balance is empty now
    assert_eq!(ctx.client.beneficiary_withdraw(), 0);
    assert_eq!(ctx.token.balance(&ctx.beneficiary), 350);
}

#[test]
fn test_beneficiary_withdraw_sweeps_whole_balance() {
    let ctx = setup_test();
    let investor = ctx.whitelisted_investor(100);
    ctx.client.deposit(&investor, &100);
    ctx.token_admin.mint(&ctx.client.address, &42);

    ctx.client.close(&ctx.primary);
    ctx.client.enable_released(&ctx.primary);

    assert_eq!(ctx.client.beneficiary_withdraw(), 142);
    assert_eq!(ctx.token.balance(&ctx.beneficiary), 142);
}

#[test]
fn test_beneficiary_withdraw_requires_released() {
    let ctx = setup_test();
    let investor = ctx.whitelisted_investor(100);
    ctx.client.deposit(&investor, &100);

    assert_eq!(
        ctx.client.try_beneficiary_withdraw(),
        Err(Ok(Error::InvalidState))
    );

    ctx.client.close(&ctx.primary);
    assert_eq!(
        ctx.client.try_beneficiary_withdraw(),
        Err(Ok(Error::InvalidState))
    );

    ctx.client.enable_refunds(&ctx.primary);
    assert_eq!(
        ctx.client.try_beneficiary_withdraw(),
        Err(Ok(Error::InvalidState))
    );
    assert_eq!(ctx.token.balance(&ctx.beneficiary), 0);
}

#[test]
fn test_beneficiary_withdraw_needs_no_signature() {
    let ctx = setup_test();
    let investor = ctx.whitelisted_investor(100);
    ctx.client.deposit(&investor, &100);
    ctx.client.close(&ctx.primary);
    ctx.client.enable_released(&ctx.primary);

    assert_eq!(ctx.client.beneficiary_withdraw(), 100);

    // Nobody had to sign for the payout
    assert!(ctx.env.auths().is_empty());
    assert_eq!(ctx.token.balance(&ctx.beneficiary), 100);
}

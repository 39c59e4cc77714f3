use roster_backend::db::enums::SwapStatus;

#[test]
fn pending_swap_can_be_resolved() {
    assert!(SwapStatus::Pending.can_transition_to(SwapStatus::Approved));
    assert!(SwapStatus::Pending.can_transition_to(SwapStatus::Rejected));
}

#[test]
fn resolved_swaps_accept_nothing_further() {
    for resolved in [SwapStatus::Approved, SwapStatus::Rejected] {
        for target in [SwapStatus::Pending, SwapStatus::Approved, SwapStatus::Rejected] {
            assert!(!resolved.can_transition_to(target));
        }
    }
}

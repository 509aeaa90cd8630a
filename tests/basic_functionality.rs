//! Basic functionality tests for EVO Emergency

use evo_emergency::{
    EMERGENCY_CAPACITY, EmergencyError, EmergencyNode, EmergencyResult,
};

#[test]
fn test_raise_query_solve_scenario() -> EmergencyResult<()> {
    let node = EmergencyNode::new();

    node.raise(5)?;
    assert_eq!(node.active_count(), 1);
    assert!(node.is_raised(5)?);

    // Idempotent re-raise.
    node.raise(5)?;
    assert_eq!(node.active_count(), 1);

    node.raise(10)?;
    assert_eq!(node.active_count(), 2);

    node.solve(5)?;
    assert_eq!(node.active_count(), 1);
    assert!(!node.is_raised(5)?);

    node.solve(10)?;
    assert_eq!(node.active_count(), 0);
    assert!(!node.is_emergency_state());
    Ok(())
}

#[test]
fn test_emergency_state_tracks_counter() -> EmergencyResult<()> {
    let node = EmergencyNode::new();
    assert!(!node.is_emergency_state());

    node.raise(7)?;
    assert!(node.is_emergency_state());

    node.solve(7)?;
    assert!(!node.is_emergency_state());
    Ok(())
}

#[test]
fn test_raise_solve_inverse() -> EmergencyResult<()> {
    let node = EmergencyNode::new();

    for id in 0..20 {
        node.raise(id)?;
    }
    assert_eq!(node.active_count(), 20);

    for id in 0..20 {
        node.solve(id)?;
    }
    assert_eq!(node.active_count(), 0);
    for id in 0..EMERGENCY_CAPACITY as u8 {
        assert!(!node.is_raised(id)?);
    }
    Ok(())
}

#[test]
fn test_boundary_ids() {
    let node = EmergencyNode::new();

    assert!(node.raise(63).is_ok());
    assert_eq!(node.active_count(), 1);

    match node.raise(64) {
        Err(EmergencyError::InvalidId { id }) => assert_eq!(id, 64),
        other => panic!("Expected InvalidId error, got: {:?}", other),
    }
    match node.solve(64) {
        Err(EmergencyError::InvalidId { id }) => assert_eq!(id, 64),
        other => panic!("Expected InvalidId error, got: {:?}", other),
    }

    // Rejected calls never mutate state.
    assert_eq!(node.active_count(), 1);
    assert!(node.is_raised(63).unwrap());
}

#[test]
fn test_full_capacity() -> EmergencyResult<()> {
    let node = EmergencyNode::new();

    for id in 0..EMERGENCY_CAPACITY as u8 {
        node.raise(id)?;
    }
    assert_eq!(usize::from(node.active_count()), EMERGENCY_CAPACITY);
    for id in 0..EMERGENCY_CAPACITY as u8 {
        assert!(node.is_raised(id)?);
    }

    for id in 0..EMERGENCY_CAPACITY as u8 {
        node.solve(id)?;
    }
    assert_eq!(node.active_count(), 0);
    Ok(())
}

#[test]
fn test_destroy_with_active_emergencies() -> EmergencyResult<()> {
    let node = EmergencyNode::new();
    node.raise(5)?;
    node.raise(10)?;
    assert_eq!(node.active_count(), 2);

    node.destroy();
    assert_eq!(node.active_count(), 0);
    assert!(!node.is_emergency_state());

    // Destroying an already-empty node is a no-op success.
    node.destroy();
    assert_eq!(node.active_count(), 0);
    Ok(())
}

#[test]
fn test_many_sequential_operations() -> EmergencyResult<()> {
    let node = EmergencyNode::new();

    for i in 0..10_000u32 {
        node.raise((i % 64) as u8)?;
    }
    for i in 0..10_000u32 {
        node.solve((i % 64) as u8)?;
    }
    assert_eq!(node.active_count(), 0);
    Ok(())
}

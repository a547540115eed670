//! Every buffer the boundary acquires is released, on success and on error

use hpc_core::scalar_sequential;
use hpc_kernels::{CallBoundary, Error, KernelConfig};
use serde_json::json;
use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Alignment no other allocation in this process asks for
const TRACKED_ALIGNMENT: usize = 2048;

struct CountingAllocator;

static ALLOCATED: AtomicUsize = AtomicUsize::new(0);
static RELEASED: AtomicUsize = AtomicUsize::new(0);

unsafe impl GlobalAlloc for CountingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if layout.align() == TRACKED_ALIGNMENT {
            ALLOCATED.fetch_add(1, Ordering::SeqCst);
        }
        System.alloc(layout)
    }

    unsafe fn alloc_zeroed(&self, layout: Layout) -> *mut u8 {
        if layout.align() == TRACKED_ALIGNMENT {
            ALLOCATED.fetch_add(1, Ordering::SeqCst);
        }
        System.alloc_zeroed(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        if layout.align() == TRACKED_ALIGNMENT {
            RELEASED.fetch_add(1, Ordering::SeqCst);
        }
        System.dealloc(ptr, layout)
    }
}

#[global_allocator]
static GLOBAL: CountingAllocator = CountingAllocator;

fn counts() -> (usize, usize) {
    (ALLOCATED.load(Ordering::SeqCst), RELEASED.load(Ordering::SeqCst))
}

// One test function so no other test allocates tracked buffers concurrently
#[test]
fn test_buffers_released_on_every_path() {
    let config = KernelConfig::default().with_alignment(TRACKED_ALIGNMENT);
    let boundary = CallBoundary::with_config(scalar_sequential(), config).unwrap();

    // Success: two operands and one result
    let (before_alloc, before_free) = counts();
    let c = boundary.vecadd(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]).unwrap();
    assert_eq!(c, vec![5.0, 7.0, 9.0]);
    let (after_alloc, after_free) = counts();
    assert_eq!(after_alloc - before_alloc, 3);
    assert_eq!(after_free - before_free, 3);

    // Length mismatch: rejected before anything is acquired
    let (before_alloc, before_free) = counts();
    let err = boundary.vecmul(&[1.0, 2.0, 3.0], &[1.0, 2.0]).unwrap_err();
    assert!(matches!(err, Error::LengthMismatch { left: 3, right: 2 }));
    assert_eq!(counts(), (before_alloc, before_free));

    // Bad element in the second operand: the first buffer is already held
    let (before_alloc, before_free) = counts();
    let a = vec![json!(1.0), json!(2.0)];
    let b = vec![json!(1.0), json!("x")];
    let err = boundary.vecdiv(&a, &b).unwrap_err();
    assert!(matches!(err, Error::InvalidInput(_)));
    let (after_alloc, after_free) = counts();
    assert_eq!(after_alloc - before_alloc, 2);
    assert_eq!(after_free - before_free, 2);

    // Empty operands acquire nothing
    let (before_alloc, before_free) = counts();
    let empty: Vec<f64> = Vec::new();
    assert!(boundary.vecadd(&empty, &empty).unwrap().is_empty());
    assert_eq!(counts(), (before_alloc, before_free));

    // Integration never marshals a buffer
    let (before_alloc, before_free) = counts();
    boundary.compute_pi(1_000).unwrap();
    assert!(matches!(boundary.compute_pi(0), Err(Error::InvalidArgument(_))));
    assert_eq!(counts(), (before_alloc, before_free));

    // Many calls leave nothing behind
    for n in 1..50 {
        let x: Vec<f64> = (0..n).map(|i| i as f64).collect();
        boundary.vecmul(&x, &x).unwrap();
    }
    let (allocated, released) = counts();
    assert_eq!(allocated, released);
}

use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use tui_render3d::particles::{ParticleConfig, ParticleSystem, SphereEmitter};

struct CountingAlloc;

static COUNT_ENABLED: AtomicBool = AtomicBool::new(false);
static ALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.realloc(ptr, layout, new_size)
    }
}

fn with_alloc_counting<F: FnOnce()>(f: F) -> usize {
    ALLOC_COUNT.store(0, Ordering::Relaxed);
    COUNT_ENABLED.store(true, Ordering::Relaxed);
    f();
    COUNT_ENABLED.store(false, Ordering::Relaxed);
    ALLOC_COUNT.load(Ordering::Relaxed)
}

#[test]
fn particle_ticks_do_not_allocate() {
    // The pool is sized at construction; spawning, ageing and expiring reuse it.
    let config = ParticleConfig::default()
        .with_max_particles(128)
        .with_emission_rate(400.0)
        .with_lifetime(0.25);
    let mut sys = ParticleSystem::new(SphereEmitter::new(1.0, 2.0), config);

    let allocs = with_alloc_counting(|| {
        for _ in 0..600 {
            sys.update(1.0 / 60.0);
        }
        sys.reset();
        for _ in 0..60 {
            sys.update(1.0 / 30.0);
        }
    });

    assert_eq!(allocs, 0);
    assert!(sys.len() <= 128);
    assert!(sys.particles().iter().all(|p| p.position.is_finite()));
}

//! Browser-side facade smoke test, run with `wasm-pack test --headless`.

#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use contoura_engine::Emulator;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn facade_trace_and_emulate() {
    let mut emulator = Emulator::new();
    emulator.load_image("blob:texture".to_string(), 300.0, 200.0);

    emulator.add_point(0.0, 0.0);
    emulator.add_point(50.0, 0.0);
    emulator.add_point(50.0, 50.0);
    emulator.add_point(0.0, 50.0);
    assert_eq!(emulator.outline_len(), 4);
    assert_eq!(emulator.outline_flat().length(), 8);

    emulator.set_emulation(true, 800.0, 600.0);
    assert!(emulator.emulation_active());
    assert_eq!(emulator.body_count(), 5);

    emulator.step();
    assert_eq!(emulator.frame(), 1);

    emulator.set_emulation(false, 0.0, 0.0);
    assert_eq!(emulator.body_count(), 0);
}

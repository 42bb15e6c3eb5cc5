//! # Backpropagation through a single neuron
//!
//! Builds `o = tanh(x1*w1 + x2*w2 + b)` by hand, runs `backward()` and prints
//! every node with its gradient. The same neuron is then rebuilt with `tanh`
//! spelled out as `(e - 1) / (e + 1)`, `e = exp(2n)`, to show that both graphs
//! produce identical gradients.
//!
//! ## Running
//! `cargo run --example single_neuron`

use nanograd_core::Value;

fn build(composed_tanh: bool) -> (Vec<Value>, Value) {
    let x1 = Value::with_label(2.0, "x1");
    let x2 = Value::with_label(0.0, "x2");
    let w1 = Value::with_label(-3.0, "w1");
    let w2 = Value::with_label(1.0, "w2");
    let b = Value::with_label(6.8813735870195432, "b");

    let x1w1 = &x1 * &w1;
    x1w1.set_label("x1*w1");
    let x2w2 = &x2 * &w2;
    x2w2.set_label("x2*w2");
    let n = &(&x1w1 + &x2w2) + &b;
    n.set_label("n");

    let o = if composed_tanh {
        let e = (2.0 * &n).exp();
        (&e - 1.0) / (&e + 1.0)
    } else {
        n.tanh()
    };
    o.set_label("o");
    (vec![x1, x2, w1, w2, b], o)
}

fn main() {
    let _ = env_logger::builder().try_init();

    for composed in [false, true] {
        let (leaves, o) = build(composed);
        o.backward();

        println!(
            "--- tanh {} ---",
            if composed { "as (e - 1)/(e + 1)" } else { "primitive" }
        );
        println!("o = {:.6}", o.data());
        for leaf in &leaves {
            println!("{:?}", leaf);
        }
    }
}

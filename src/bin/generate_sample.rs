/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

/// Nominal (current A, voltage V) per monitored rail pair. Seven pairs give
/// the 14-column layout the analyzer writes: 12V back first, 12V aux last.
const RAILS: [(f64, f64); 7] = [
    (1.5, 12.0),  // 12V back
    (2.0, 3.3),   // 3.3V
    (1.2, 5.0),   // 5V
    (4.0, 12.0),  // 12V CPU
    (0.8, 5.0),   // 5V standby
    (0.3, 3.3),   // 3.3V aux
    (0.25, 12.0), // 12V aux
];

fn main() {
    let mut rng = SimpleRng::new(42);
    let rows = 200;

    let output_path = "powermeasure.csv";
    let mut writer = csv::Writer::from_path(output_path).expect("Failed to create output file");

    for step in 0..rows {
        // Slow load ramp so the derived power column has visible structure.
        let load_factor = 1.0 + 0.5 * (step as f64 / rows as f64);

        let mut fields = Vec::with_capacity(RAILS.len() * 2);
        for &(current, voltage) in &RAILS {
            let a = (rng.gauss(current * load_factor, 0.05 * current)).max(0.0);
            let v = rng.gauss(voltage, 0.01 * voltage);
            fields.push(format!("{a:.4}"));
            fields.push(format!("{v:.4}"));
        }

        writer
            .write_record(&fields)
            .expect("Failed to write record");
    }

    writer.flush().expect("Failed to flush output file");

    println!(
        "Wrote {rows} samples ({} channels each) to {output_path}",
        RAILS.len() * 2
    );
}

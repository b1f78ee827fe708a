//! Writes `sample_exoplanets.csv`, a synthetic catalogue in the archive's
//! export layout, for running the explorer offline
//! (`"data_path": "sample_exoplanets.csv"` in `exoatlas.json`).

use std::io::Write;

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

    fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64()
    }

    /// Log-uniform draw, for quantities spanning orders of magnitude.
    fn log_uniform(&mut self, lo: f64, hi: f64) -> f64 {
        (lo.ln() + (hi.ln() - lo.ln()) * self.next_f64()).exp()
    }
}

const HEADER: [&str; 8] = [
    "pl_name", "hostname", "disc_year", "pl_rade", "pl_eqt", "st_teff", "st_rad", "sy_dist",
];

const HOSTS: [&str; 8] = [
    "Kepler", "K2", "TOI", "HD", "GJ", "WASP", "TRAPPIST", "LHS",
];

/// Empty cell with probability `p`, else the value to 3 decimals.
fn maybe(rng: &mut SimpleRng, p: f64, value: f64) -> String {
    if rng.next_f64() < p {
        String::new()
    } else {
        format!("{value:.3}")
    }
}

fn main() -> anyhow::Result<()> {
    let mut rng = SimpleRng::new(42);
    let output_path = "sample_exoplanets.csv";

    let mut file = std::fs::File::create(output_path)?;
    writeln!(file, "# Synthetic exoplanet catalogue (archive column layout)")?;
    writeln!(file, "# Distances are in the units of sy_dist; some cells are intentionally blank")?;

    let mut writer = csv::Writer::from_writer(file);
    writer.write_record(HEADER)?;

    let n_systems = 400;
    let mut n_rows = 0;
    for system in 0..n_systems {
        let host = format!("{}-{}", HOSTS[system % HOSTS.len()], 100 + system);
        let star_temp = rng.uniform(2500.0, 7500.0);
        let star_radius = rng.log_uniform(0.1, 3.0);
        let distance = rng.log_uniform(1.3, 5000.0);
        let n_planets = 1 + (rng.next_u64() % 4) as usize;

        for p in 0..n_planets {
            let letter = (b'b' + p as u8) as char;
            let radius = rng.log_uniform(0.3, 20.0);
            // Closer-in planets run hotter.
            let temp = star_temp * (0.02 + 0.12 * rng.next_f64()) / (1.0 + p as f64 * 0.4);
            let year = 1995 + rng.next_u64() % 31;

            writer.write_record([
                format!("{host} {letter}"),
                host.clone(),
                year.to_string(),
                maybe(&mut rng, 0.05, radius),
                maybe(&mut rng, 0.25, temp),
                maybe(&mut rng, 0.03, star_temp),
                maybe(&mut rng, 0.03, star_radius),
                maybe(&mut rng, 0.02, distance),
            ])?;
            n_rows += 1;
        }
    }
    writer.flush()?;

    println!("Wrote {n_rows} planets in {n_systems} systems to {output_path}");
    Ok(())
}

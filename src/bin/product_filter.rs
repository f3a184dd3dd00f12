/*!
 * Product Filter - Entry Point
 *
 * Filters the sample catalogue sequentially, then across worker threads,
 * and prints both selections with their timings. Takes no arguments.
 */

use sync_race::filter::{run_parallel, run_sequential, sample_catalogue, FilterConfig, FilterRun};
use sync_race::init_tracing;
use tracing::info;

fn print_run(title: &str, run: &FilterRun) {
    println!();
    println!("Products matching the filter ({title}):");
    for product in &run.accepted {
        println!(
            "Name: {}, Calories: {}, Carbs: {}",
            product.name,
            product.calories(),
            product.carbs
        );
    }
    println!(
        "Elapsed ({title}): {:.6} seconds",
        run.elapsed.as_secs_f64()
    );
}

fn main() {
    init_tracing();

    let catalogue = sample_catalogue();
    let config = FilterConfig::default();
    info!(
        products = catalogue.len(),
        max_calories = config.thresholds.max_calories,
        max_carbs = config.thresholds.max_carbs,
        partitions = config.partitions,
        "Product filter starting"
    );

    print_run("single thread", &run_sequential(&catalogue, &config));
    print_run("threads", &run_parallel(&catalogue, &config));
}

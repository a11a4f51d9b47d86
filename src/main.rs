/*
 * Flocking Simulation
 *
 * A flock of boids steering by three local rules plus the cursor:
 * 1. Cohesion: steer towards the average position of neighbours
 * 2. Alignment: steer towards the average velocity of neighbours
 * 3. Separation: move away from neighbours that are too close
 * 4. Target: steer towards the cursor
 *
 * Each boid is drawn as a triangle pointing along its heading, colored
 * from green to red as it speeds up.
 */

use flocking::app::{model, update};

fn main() {
    flocking::logging::init();

    nannou::app(model).update(update).run();
}

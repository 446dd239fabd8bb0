//! Scripted front-desk session.
//!
//! Plays the part of the menu-driven console: it calls the registry with
//! already-validated arguments and renders outcomes and tables. Run with
//! `RUST_LOG=front_desk=debug` to see the registry's own tracing.

use front_desk::{
    BookingError, BookingOutcome, HotelRegistry, Promotion, RegistryConfig, RegistryEmitter,
};
use tracing_subscriber::EnvFilter;

fn render_rooms(registry: &HotelRegistry) {
    println!("\nRoom Details:");
    println!("Room Number | Type       | Price  | Status      | Customer");
    println!("{}", "-".repeat(60));
    for room in registry.view_rooms() {
        let customer = room.occupant().map(|c| c.name.as_str()).unwrap_or("N/A");
        println!(
            "{:^11} | {:<10} | {:^6} | {:<11} | {}",
            room.id(),
            room.room_type(),
            room.price(),
            room.status(),
            customer
        );
    }
    println!();
}

fn render_waitlist(registry: &HotelRegistry) {
    println!("\nWaitlist:");
    println!("Name          | Phone");
    println!("{}", "-".repeat(24));
    for customer in registry.view_waitlist() {
        println!("{:<13} | {}", customer.name, customer.phone);
    }
    println!();
}

fn report<T>(result: Result<T, BookingError>, ok: impl FnOnce(T) -> String) {
    match result {
        Ok(value) => println!("{}", ok(value)),
        Err(e) => println!("{}", e),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = RegistryConfig::from_json(r#"{ "on_rejected_promotion": "drop" }"#)?;
    let mut desk = RegistryEmitter::new(HotelRegistry::with_config(config));

    desk.on("WaitlistPromoted", |payload| {
        println!("  [event] WaitlistPromoted {}", payload);
    });

    for (id, room_type, price) in [("101", "Single", 100.0), ("102", "Double", 150.0), ("201", "Suite", 320.0)] {
        report(desk.add_room(id, room_type, price), |room| {
            format!("Room {} added successfully.", room.id())
        });
    }
    report(desk.add_room("101", "Suite", 999.0), |_| String::new());

    let book = |outcome: BookingOutcome| match outcome {
        BookingOutcome::Booked { room, customer } => {
            format!("Room {} booked successfully for {}.", room, customer.name)
        }
        BookingOutcome::Waitlisted { room, customer, position } => format!(
            "Room {} is not available. {} has been added to the waitlist (#{}).",
            room, customer.name, position
        ),
    };
    report(desk.book_room("101", "Alice", "555-0101"), book);
    report(desk.book_room("101", "Bob", "555-0102"), book);
    report(desk.book_room("102", "Alice", "555-0101"), book);

    render_rooms(desk.registry());
    render_waitlist(desk.registry());

    report(desk.check_in("101"), |room| format!("Room {} is now occupied.", room.id()));
    report(desk.check_out("101"), |outcome| {
        let mut line = format!(
            "Customer {} has checked out from room {}.",
            outcome.departed.name, outcome.room
        );
        match outcome.promotion {
            Promotion::WaitlistEmpty => {}
            Promotion::Promoted(customer) => line.push_str(&format!(
                "\nAssigning room {} to {} from the waitlist.",
                outcome.room, customer.name
            )),
            Promotion::Rejected { candidate, reason, .. } => line.push_str(&format!(
                "\nCould not assign room {} to {}: {}",
                outcome.room, candidate.name, reason
            )),
        }
        line
    });

    render_rooms(desk.registry());

    report(desk.undo_last_action(), |action| format!("Undone {}.", action));
    report(desk.undo_last_action(), |action| format!("Undone {}.", action));

    render_rooms(desk.registry());
    render_waitlist(desk.registry());

    println!("{}", desk.registry().view().to_json()?);
    Ok(())
}

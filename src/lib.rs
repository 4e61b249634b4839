//! # Sleuth - Case Progression Engine for the Rookie Detective Level
//!
//! **Sleuth** drives the "Rookie Detective" learning level: a learner reads a case
//! scenario, reviews evidence, sketches a flowchart of the investigation, and writes it
//! down as pseudocode. The crate owns the logic behind that screen and nothing else.
//! Rendering is left to the host application.
//!
//! ## Core Workflow
//!
//! 1.  **Load a Catalog**: Parse a catalog document (JSON) or use the built-in
//!     [`Catalog::rookie`]. Loading validates the linear unlock chain up front.
//!     Custom content formats plug in through the `IntoCatalog` trait.
//! 2.  **Open a Session**: A [`Session`] owns the completion set and the open
//!     investigation, and reports to a [`SessionObserver`].
//! 3.  **Investigate**: Select an unlocked case and advance it through
//!     briefing, evidence, flowchart, pseudocode and completion. The two authoring steps
//!     are gated by shallow validators.
//! 4.  **Poll**: Completion is reported after a short display delay. Call
//!     [`Session::poll`] from the host's event loop to deliver it.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sleuth::prelude::*;
//!
//! struct Board;
//!
//! impl SessionObserver for Board {
//!     fn on_case_complete(&mut self, case_id: &str) {
//!         println!("Solved {}", case_id);
//!     }
//!     fn on_level_complete(&mut self) {
//!         println!("Ready for Junior Detective!");
//!     }
//! }
//!
//! fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
//!     let catalog = Catalog::rookie()?;
//!     let mut session = Session::new(catalog, Board);
//!
//!     session.select_case("case-1-missing-lunch")?;
//!     session.advance()?; // briefing -> evidence
//!     session.advance()?; // evidence -> flowchart
//!
//!     let investigation = session.investigation_mut()?;
//!     investigation.add_node(NodeRole::Start);
//!     investigation.add_node(NodeRole::Process);
//!     investigation.add_node(NodeRole::End);
//!     session.advance()?; // flowchart -> pseudocode
//!
//!     session.investigation_mut()?.set_pseudocode(
//!         "BEGIN investigation\n  INTERVIEW each witness\n  SEARCH the closet\nEND investigation",
//!     );
//!     session.advance()?; // pseudocode -> complete
//!
//!     // Later, from the event loop:
//!     session.poll_now();
//!     println!("{}", session.summary());
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod investigation;
pub mod prelude;
pub mod progress;
pub mod session;
pub mod validation;

pub use catalog::Catalog;
pub use config::LevelConfig;
pub use investigation::{Investigation, Step};
pub use session::{Session, SessionObserver};

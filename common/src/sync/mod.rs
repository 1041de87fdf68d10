pub mod irq;
pub mod irq_cell;
pub use irq_cell::IrqCell;

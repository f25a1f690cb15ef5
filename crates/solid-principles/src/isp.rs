//! Interface Segregation: no client should implement what it cannot do.
//!
//! The legacy `MultiFunction` and `GestureProtocol` traits force simple
//! devices to carry silent, empty methods. The refactored traits are split
//! by capability, so a print-only device has nothing else to offer:
//!
//! ```compile_fail
//! use solid_principles::isp::{scan_job, CanonPrinter};
//! use solid_core::Transcript;
//!
//! scan_job(&CanonPrinter, &Transcript::new());
//! ```
//!
//! ```compile_fail
//! use solid_principles::isp::{DoubleTap, PoorButton};
//! use solid_core::Transcript;
//!
//! PoorButton.did_double_tap(&Transcript::new());
//! ```
//!
//! A printer-scanner has no fax line, so it cannot be handed to a fax job:
//!
//! ```compile_fail
//! use solid_principles::isp::{fax_job, HpPrinterNScanner};
//! use solid_core::Transcript;
//!
//! fax_job(&HpPrinterNScanner, &Transcript::new());
//! ```
//!
//! The same call compiles for a device that does fax:
//!
//! ```
//! use solid_principles::isp::{fax_job, XeroxWorkCenter};
//! use solid_core::Transcript;
//!
//! let transcript = Transcript::new();
//! fax_job(&XeroxWorkCenter, &transcript);
//! assert!(!transcript.is_empty());
//! ```

use solid_core::{Console, Example, ExecutionContext, Principle, Variant};

pub mod legacy {
    use super::*;

    /// Fat interface: print, scan and fax in one contract.
    pub trait MultiFunction {
        fn print_something(&self, console: &dyn Console);
        fn print_spool_details(&self, console: &dyn Console);
        fn scan(&self, console: &dyn Console);
        fn scan_photo(&self, console: &dyn Console);
        fn fax(&self, console: &dyn Console);
        fn internet_fax(&self, console: &dyn Console);
    }

    #[derive(Debug, Default)]
    pub struct XeroxWorkCenterOld;

    impl MultiFunction for XeroxWorkCenterOld {
        fn print_something(&self, console: &dyn Console) {
            console.emit("Print Something");
        }

        fn print_spool_details(&self, console: &dyn Console) {
            console.emit("Print Spool Details");
        }

        fn scan(&self, console: &dyn Console) {
            console.emit("Scan");
        }

        fn scan_photo(&self, console: &dyn Console) {
            console.emit("Scan Photo");
        }

        fn fax(&self, console: &dyn Console) {
            console.emit("Send Fax");
        }

        fn internet_fax(&self, console: &dyn Console) {
            console.emit("Send Internet Fax");
        }
    }

    #[derive(Debug, Default)]
    pub struct HpPrinterNScannerOld;

    impl MultiFunction for HpPrinterNScannerOld {
        fn print_something(&self, console: &dyn Console) {
            console.emit("Print Something");
        }

        fn print_spool_details(&self, console: &dyn Console) {
            console.emit("Print Spool Details");
        }

        fn scan(&self, console: &dyn Console) {
            console.emit("Scan");
        }

        fn scan_photo(&self, console: &dyn Console) {
            console.emit("Scan Photo");
        }

        fn fax(&self, _console: &dyn Console) {}

        fn internet_fax(&self, _console: &dyn Console) {}
    }

    #[derive(Debug, Default)]
    pub struct CanonPrinterOld;

    impl MultiFunction for CanonPrinterOld {
        fn print_something(&self, console: &dyn Console) {
            console.emit("Print Something");
        }

        fn print_spool_details(&self, console: &dyn Console) {
            console.emit("Print Spool Details");
        }

        fn scan(&self, _console: &dyn Console) {}

        fn scan_photo(&self, _console: &dyn Console) {}

        fn fax(&self, _console: &dyn Console) {}

        fn internet_fax(&self, _console: &dyn Console) {}
    }

    /// Calls every operation; empty ones stay silent.
    pub fn operate(device: &dyn MultiFunction, console: &dyn Console) {
        device.print_something(console);
        device.print_spool_details(console);
        device.scan(console);
        device.scan_photo(console);
        device.fax(console);
        device.internet_fax(console);
    }

    pub trait GestureProtocol {
        fn did_tap(&self, console: &dyn Console);
        fn did_double_tap(&self, console: &dyn Console);
        fn did_long_press(&self, console: &dyn Console);
    }

    #[derive(Debug, Default)]
    pub struct SuperButtonOld;

    impl GestureProtocol for SuperButtonOld {
        fn did_tap(&self, console: &dyn Console) {
            console.emit("Tap");
        }

        fn did_double_tap(&self, console: &dyn Console) {
            console.emit("Double Tap");
        }

        fn did_long_press(&self, console: &dyn Console) {
            console.emit("Long Press");
        }
    }

    #[derive(Debug, Default)]
    pub struct PoorButtonOld;

    impl GestureProtocol for PoorButtonOld {
        fn did_tap(&self, console: &dyn Console) {
            console.emit("Tap");
        }

        fn did_double_tap(&self, _console: &dyn Console) {}

        fn did_long_press(&self, _console: &dyn Console) {}
    }

    pub fn press(button: &dyn GestureProtocol, console: &dyn Console) {
        button.did_tap(console);
        button.did_double_tap(console);
        button.did_long_press(console);
    }
}

// ============================================================================
// PRINTER / SCANNER / FAX
// ============================================================================

pub trait Printer {
    fn print_something(&self, console: &dyn Console);
    fn print_spool_details(&self, console: &dyn Console);
}

pub trait Scanner {
    fn scan(&self, console: &dyn Console);
    fn scan_photo(&self, console: &dyn Console);
}

pub trait Fax {
    fn fax(&self, console: &dyn Console);
    fn internet_fax(&self, console: &dyn Console);
}

#[derive(Debug, Default)]
pub struct XeroxWorkCenter;

impl Printer for XeroxWorkCenter {
    fn print_something(&self, console: &dyn Console) {
        console.emit("Print Something");
    }

    fn print_spool_details(&self, console: &dyn Console) {
        console.emit("Print Spool Details");
    }
}

impl Scanner for XeroxWorkCenter {
    fn scan(&self, console: &dyn Console) {
        console.emit("Scan");
    }

    fn scan_photo(&self, console: &dyn Console) {
        console.emit("Scan Photo");
    }
}

impl Fax for XeroxWorkCenter {
    fn fax(&self, console: &dyn Console) {
        console.emit("Send Fax");
    }

    fn internet_fax(&self, console: &dyn Console) {
        console.emit("Send Internet Fax");
    }
}

#[derive(Debug, Default)]
pub struct HpPrinterNScanner;

impl Printer for HpPrinterNScanner {
    fn print_something(&self, console: &dyn Console) {
        console.emit("Print Something");
    }

    fn print_spool_details(&self, console: &dyn Console) {
        console.emit("Print Spool Details");
    }
}

impl Scanner for HpPrinterNScanner {
    fn scan(&self, console: &dyn Console) {
        console.emit("Scan");
    }

    fn scan_photo(&self, console: &dyn Console) {
        console.emit("Scan Photo");
    }
}

#[derive(Debug, Default)]
pub struct CanonPrinter;

impl Printer for CanonPrinter {
    fn print_something(&self, console: &dyn Console) {
        console.emit("Print Something");
    }

    fn print_spool_details(&self, console: &dyn Console) {
        console.emit("Print Spool Details");
    }
}

pub fn print_job(printer: &dyn Printer, console: &dyn Console) {
    printer.print_something(console);
    printer.print_spool_details(console);
}

pub fn scan_job(scanner: &dyn Scanner, console: &dyn Console) {
    scanner.scan(console);
    scanner.scan_photo(console);
}

pub fn fax_job(fax: &dyn Fax, console: &dyn Console) {
    fax.fax(console);
    fax.internet_fax(console);
}

// ============================================================================
// GESTURES
// ============================================================================

pub trait Tap {
    fn did_tap(&self, console: &dyn Console);
}

pub trait DoubleTap {
    fn did_double_tap(&self, console: &dyn Console);
}

pub trait LongPress {
    fn did_long_press(&self, console: &dyn Console);
}

#[derive(Debug, Default)]
pub struct SuperButton;

impl Tap for SuperButton {
    fn did_tap(&self, console: &dyn Console) {
        console.emit("Tap");
    }
}

impl DoubleTap for SuperButton {
    fn did_double_tap(&self, console: &dyn Console) {
        console.emit("Double Tap");
    }
}

impl LongPress for SuperButton {
    fn did_long_press(&self, console: &dyn Console) {
        console.emit("Long Press");
    }
}

#[derive(Debug, Default)]
pub struct PoorButton;

impl Tap for PoorButton {
    fn did_tap(&self, console: &dyn Console) {
        console.emit("Tap");
    }
}

// ============================================================================
// EXAMPLES
// ============================================================================

pub struct OfficeDeviceExample;

impl Example for OfficeDeviceExample {
    fn id(&self) -> &'static str {
        "isp.office"
    }

    fn principle(&self) -> Principle {
        Principle::Isp
    }

    fn title(&self) -> &'static str {
        "Printer Scanner Fax Machine Example"
    }

    fn run(&self, variant: Variant, _ctx: &ExecutionContext, console: &dyn Console) {
        match variant {
            Variant::Legacy => {
                let devices: [(&str, &dyn legacy::MultiFunction); 3] = [
                    ("XeroxWorkCenter", &legacy::XeroxWorkCenterOld),
                    ("HPPrinterNScanner", &legacy::HpPrinterNScannerOld),
                    ("CanonPrinter", &legacy::CanonPrinterOld),
                ];
                for (name, device) in devices {
                    console.emit(&format!("-- {}", name));
                    legacy::operate(device, console);
                }
            }
            Variant::Refactored => {
                console.emit("-- XeroxWorkCenter");
                print_job(&XeroxWorkCenter, console);
                scan_job(&XeroxWorkCenter, console);
                fax_job(&XeroxWorkCenter, console);

                console.emit("-- HPPrinterNScanner");
                print_job(&HpPrinterNScanner, console);
                scan_job(&HpPrinterNScanner, console);

                console.emit("-- CanonPrinter");
                print_job(&CanonPrinter, console);
            }
        }
    }
}

pub struct GestureExample;

impl Example for GestureExample {
    fn id(&self) -> &'static str {
        "isp.gesture"
    }

    fn principle(&self) -> Principle {
        Principle::Isp
    }

    fn title(&self) -> &'static str {
        "Gesture Example"
    }

    fn run(&self, variant: Variant, _ctx: &ExecutionContext, console: &dyn Console) {
        match variant {
            Variant::Legacy => {
                console.emit("-- SuperButton");
                legacy::press(&legacy::SuperButtonOld, console);
                console.emit("-- PoorButton");
                legacy::press(&legacy::PoorButtonOld, console);
            }
            Variant::Refactored => {
                console.emit("-- SuperButton");
                SuperButton.did_tap(console);
                SuperButton.did_double_tap(console);
                SuperButton.did_long_press(console);
                console.emit("-- PoorButton");
                PoorButton.did_tap(console);
            }
        }
    }
}

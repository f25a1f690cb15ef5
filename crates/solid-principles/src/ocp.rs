//! Open-Closed: add behaviour by adding types, not by editing callers.

use solid_core::{Coin, Console, Example, ExecutionContext, Principle, Variant};
use std::f64::consts::PI;
use std::rc::Rc;

pub const LOYAL_DISCOUNT_PERCENT: u32 = 20;

pub mod legacy {
    use super::*;

    /// Needs a new method for every new profile type.
    #[derive(Debug, Default)]
    pub struct InsurancePremiumDiscountCalculatorOld;

    impl InsurancePremiumDiscountCalculatorOld {
        pub fn calculate_premium_discount_percent(&self, customer: &HealthInsuranceCustomerProfileOld) -> u32 {
            if customer.is_loyal_customer() {
                return LOYAL_DISCOUNT_PERCENT;
            }
            0
        }

        pub fn calculate_vehicle_premium_discount_percent(
            &self,
            customer: &VehicleInsuranceCustomerProfileOld,
        ) -> u32 {
            if customer.is_loyal_customer() {
                return LOYAL_DISCOUNT_PERCENT;
            }
            0
        }
    }

    pub struct HealthInsuranceCustomerProfileOld {
        coin: Rc<dyn Coin>,
    }

    impl HealthInsuranceCustomerProfileOld {
        pub fn new(coin: Rc<dyn Coin>) -> Self {
            Self { coin }
        }

        pub fn is_loyal_customer(&self) -> bool {
            self.coin.flip()
        }
    }

    pub struct VehicleInsuranceCustomerProfileOld {
        coin: Rc<dyn Coin>,
    }

    impl VehicleInsuranceCustomerProfileOld {
        pub fn new(coin: Rc<dyn Coin>) -> Self {
            Self { coin }
        }

        pub fn is_loyal_customer(&self) -> bool {
            self.coin.flip()
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct RectangleOld {
        pub width: f64,
        pub height: f64,
    }

    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct CircleOld {
        pub radius: f64,
    }

    /// Closed set of shapes; a new shape means a new arm below.
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub enum ShapeOld {
        Rectangle(RectangleOld),
        Circle(CircleOld),
    }

    #[derive(Debug, Default)]
    pub struct AreaCalculatorOld;

    impl AreaCalculatorOld {
        pub fn area(&self, shape: &ShapeOld) -> f64 {
            match shape {
                ShapeOld::Rectangle(rectangle) => rectangle.width * rectangle.height,
                ShapeOld::Circle(circle) => PI * circle.radius * circle.radius,
            }
        }
    }
}

// ============================================================================
// INSURANCE
// ============================================================================

pub trait CustomerProfile {
    fn is_loyal_customer(&self) -> bool;
}

pub struct HealthInsuranceCustomerProfile {
    coin: Rc<dyn Coin>,
}

impl HealthInsuranceCustomerProfile {
    pub fn new(coin: Rc<dyn Coin>) -> Self {
        Self { coin }
    }
}

impl CustomerProfile for HealthInsuranceCustomerProfile {
    fn is_loyal_customer(&self) -> bool {
        self.coin.flip()
    }
}

pub struct VehicleInsuranceCustomerProfile {
    coin: Rc<dyn Coin>,
}

impl VehicleInsuranceCustomerProfile {
    pub fn new(coin: Rc<dyn Coin>) -> Self {
        Self { coin }
    }
}

impl CustomerProfile for VehicleInsuranceCustomerProfile {
    fn is_loyal_customer(&self) -> bool {
        self.coin.flip()
    }
}

/// Added without touching the calculator.
pub struct LifeInsuranceCustomerProfile {
    coin: Rc<dyn Coin>,
}

impl LifeInsuranceCustomerProfile {
    pub fn new(coin: Rc<dyn Coin>) -> Self {
        Self { coin }
    }
}

impl CustomerProfile for LifeInsuranceCustomerProfile {
    fn is_loyal_customer(&self) -> bool {
        self.coin.flip()
    }
}

#[derive(Debug, Default)]
pub struct InsurancePremiumDiscountCalculator;

impl InsurancePremiumDiscountCalculator {
    pub fn calculate_premium_discount_percent(&self, customer: &dyn CustomerProfile) -> u32 {
        if customer.is_loyal_customer() {
            return LOYAL_DISCOUNT_PERCENT;
        }
        0
    }
}

// ============================================================================
// AREA
// ============================================================================

pub trait Shape {
    fn area(&self) -> f64;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    pub width: f64,
    pub height: f64,
}

impl Rectangle {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Shape for Rectangle {
    fn area(&self) -> f64 {
        self.width * self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub radius: f64,
}

impl Circle {
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }
}

impl Shape for Circle {
    fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }
}

#[derive(Debug, Default)]
pub struct AreaCalculator;

impl AreaCalculator {
    pub fn area(&self, shape: &dyn Shape) -> f64 {
        shape.area()
    }
}

// ============================================================================
// EXAMPLES
// ============================================================================

pub struct InsuranceExample;

impl Example for InsuranceExample {
    fn id(&self) -> &'static str {
        "ocp.insurance"
    }

    fn principle(&self) -> Principle {
        Principle::Ocp
    }

    fn title(&self) -> &'static str {
        "Insurance Premium Discount calculator Example"
    }

    fn deterministic(&self) -> bool {
        false
    }

    fn run(&self, variant: Variant, ctx: &ExecutionContext, console: &dyn Console) {
        let coin = ctx.coin();
        match variant {
            Variant::Legacy => {
                let calculator = legacy::InsurancePremiumDiscountCalculatorOld;
                let health = legacy::HealthInsuranceCustomerProfileOld::new(coin.clone());
                let vehicle = legacy::VehicleInsuranceCustomerProfileOld::new(coin);
                console.emit(&calculator.calculate_premium_discount_percent(&health).to_string());
                console.emit(&calculator.calculate_vehicle_premium_discount_percent(&vehicle).to_string());
            }
            Variant::Refactored => {
                let calculator = InsurancePremiumDiscountCalculator;
                let profiles: Vec<Box<dyn CustomerProfile>> = vec![
                    Box::new(HealthInsuranceCustomerProfile::new(coin.clone())),
                    Box::new(VehicleInsuranceCustomerProfile::new(coin.clone())),
                    Box::new(LifeInsuranceCustomerProfile::new(coin)),
                ];
                for profile in &profiles {
                    let percent = calculator.calculate_premium_discount_percent(profile.as_ref());
                    console.emit(&percent.to_string());
                }
            }
        }
    }
}

pub struct AreaExample;

impl Example for AreaExample {
    fn id(&self) -> &'static str {
        "ocp.area"
    }

    fn principle(&self) -> Principle {
        Principle::Ocp
    }

    fn title(&self) -> &'static str {
        "Area calculator Example"
    }

    fn run(&self, variant: Variant, _ctx: &ExecutionContext, console: &dyn Console) {
        match variant {
            Variant::Legacy => {
                let calculator = legacy::AreaCalculatorOld;
                let rectangle = legacy::ShapeOld::Rectangle(legacy::RectangleOld { width: 10.0, height: 10.0 });
                let circle = legacy::ShapeOld::Circle(legacy::CircleOld { radius: 10.0 });
                console.emit(&format!("{:?}", calculator.area(&rectangle)));
                console.emit(&format!("{:?}", calculator.area(&circle)));
            }
            Variant::Refactored => {
                let calculator = AreaCalculator;
                let rectangle = Rectangle::new(10.0, 10.0);
                let circle = Circle::new(10.0);
                let shapes: [&dyn Shape; 2] = [&rectangle, &circle];
                for shape in shapes {
                    console.emit(&format!("{:?}", calculator.area(shape)));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use solid_core::{FixedCoin, Transcript};

    #[test]
    fn test_rectangle_and_circle_areas() {
        let calculator = AreaCalculator;
        assert_eq!(calculator.area(&Rectangle::new(10.0, 10.0)), 100.0);
        assert!((calculator.area(&Circle::new(10.0)) - 314.159).abs() < 1e-3);
    }

    #[test]
    fn test_legacy_switch_matches_trait_dispatch() {
        let legacy = legacy::AreaCalculatorOld;
        let refactored = AreaCalculator;

        let old_circle = legacy::ShapeOld::Circle(legacy::CircleOld { radius: 2.5 });
        assert_eq!(legacy.area(&old_circle), refactored.area(&Circle::new(2.5)));

        let old_rectangle = legacy::ShapeOld::Rectangle(legacy::RectangleOld { width: 3.0, height: 4.0 });
        assert_eq!(legacy.area(&old_rectangle), refactored.area(&Rectangle::new(3.0, 4.0)));
    }

    #[test]
    fn test_new_shape_needs_no_calculator_change() {
        struct Triangle {
            base: f64,
            height: f64,
        }

        impl Shape for Triangle {
            fn area(&self) -> f64 {
                self.base * self.height / 2.0
            }
        }

        assert_eq!(AreaCalculator.area(&Triangle { base: 4.0, height: 5.0 }), 10.0);
    }

    #[test]
    fn test_discount_follows_loyalty() {
        let calculator = InsurancePremiumDiscountCalculator;
        let loyal = LifeInsuranceCustomerProfile::new(Rc::new(FixedCoin(true)));
        let casual = HealthInsuranceCustomerProfile::new(Rc::new(FixedCoin(false)));

        assert_eq!(calculator.calculate_premium_discount_percent(&loyal), 20);
        assert_eq!(calculator.calculate_premium_discount_percent(&casual), 0);
    }

    #[test]
    fn test_every_profile_goes_through_one_method() {
        let calculator = InsurancePremiumDiscountCalculator;
        let coin: Rc<dyn Coin> = Rc::new(FixedCoin(true));
        let profiles: Vec<Box<dyn CustomerProfile>> = vec![
            Box::new(HealthInsuranceCustomerProfile::new(coin.clone())),
            Box::new(VehicleInsuranceCustomerProfile::new(coin.clone())),
            Box::new(LifeInsuranceCustomerProfile::new(coin)),
        ];

        for profile in &profiles {
            assert_eq!(calculator.calculate_premium_discount_percent(profile.as_ref()), 20);
        }
    }

    #[test]
    fn test_legacy_calculator_per_type() {
        let calculator = legacy::InsurancePremiumDiscountCalculatorOld;
        let health = legacy::HealthInsuranceCustomerProfileOld::new(Rc::new(FixedCoin(true)));
        let vehicle = legacy::VehicleInsuranceCustomerProfileOld::new(Rc::new(FixedCoin(false)));

        assert_eq!(calculator.calculate_premium_discount_percent(&health), 20);
        assert_eq!(calculator.calculate_vehicle_premium_discount_percent(&vehicle), 0);
    }

    #[test]
    fn test_area_example_output() {
        let transcript = Transcript::new();
        AreaExample.run(Variant::Refactored, &ExecutionContext::new(), &transcript);
        assert_eq!(transcript.lines(), vec!["100.0", "314.1592653589793"]);
    }

    #[test]
    fn test_insurance_example_prints_valid_percentages() {
        let ctx = ExecutionContext::new().with_seed(Some(5));
        let transcript = Transcript::new();

        InsuranceExample.run(Variant::Refactored, &ctx, &transcript);

        let lines = transcript.lines();
        assert_eq!(lines.len(), 3);
        assert!(lines.iter().all(|l| l == "20" || l == "0"));
    }
}

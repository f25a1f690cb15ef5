//! Liskov Substitution: callers must not need to know which implementation
//! they hold.
//!
//! Both legacy scenarios break substitution from the caller's side:
//! `ProductUtilsOld` inspects the concrete product before asking for its
//! discount, and `AreaCalculatorOld` gets a different area from a square
//! after the same two setter calls. The refactored types are siblings of
//! one small trait instead of a specialisation chain.

use solid_core::{Console, Example, ExecutionContext, Principle, Variant};

pub const BASE_DISCOUNT: f64 = 20.0;
pub const IN_HOUSE_MULTIPLIER: f64 = 1.5;

pub mod legacy {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    pub struct ProductOld {
        discount: f64,
    }

    impl ProductOld {
        pub fn discount(&self) -> f64 {
            self.discount
        }
    }

    impl Default for ProductOld {
        fn default() -> Self {
            Self { discount: BASE_DISCOUNT }
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    pub struct InHouseProductOld {
        discount: f64,
    }

    impl InHouseProductOld {
        pub fn discount(&self) -> f64 {
            self.discount
        }

        /// Must be called before reading the discount, and compounds if
        /// called twice.
        pub fn apply_extra_discount(&mut self) {
            self.discount *= IN_HOUSE_MULTIPLIER;
        }
    }

    impl Default for InHouseProductOld {
        fn default() -> Self {
            Self { discount: BASE_DISCOUNT }
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    pub enum AnyProductOld {
        Standard(ProductOld),
        InHouse(InHouseProductOld),
    }

    impl AnyProductOld {
        pub fn discount(&self) -> f64 {
            match self {
                AnyProductOld::Standard(product) => product.discount(),
                AnyProductOld::InHouse(product) => product.discount(),
            }
        }
    }

    pub struct ProductUtilsOld {
        products: Vec<AnyProductOld>,
    }

    impl ProductUtilsOld {
        pub fn new() -> Self {
            Self {
                products: vec![
                    AnyProductOld::Standard(ProductOld::default()),
                    AnyProductOld::InHouse(InHouseProductOld::default()),
                ],
            }
        }

        /// Special-cases the in-house variant; this is the violation.
        pub fn print_discounts(&mut self, console: &dyn Console) -> Vec<f64> {
            let mut discounts = Vec::with_capacity(self.products.len());
            for product in &mut self.products {
                if let AnyProductOld::InHouse(in_house) = product {
                    in_house.apply_extra_discount();
                }
                let discount = product.discount();
                console.emit(&format!("{:?}", discount));
                discounts.push(discount);
            }
            discounts
        }
    }

    impl Default for ProductUtilsOld {
        fn default() -> Self {
            Self::new()
        }
    }

    /// Mutable rectangle contract shared by `RectangleOld` and `SquareOld`.
    pub trait ResizableRectangle {
        fn set_width(&mut self, width: f32);
        fn set_length(&mut self, length: f32);
        fn area(&self) -> f32;
    }

    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct RectangleOld {
        width: f32,
        length: f32,
    }

    impl ResizableRectangle for RectangleOld {
        fn set_width(&mut self, width: f32) {
            self.width = width;
        }

        fn set_length(&mut self, length: f32) {
            self.length = length;
        }

        fn area(&self) -> f32 {
            self.width * self.length
        }
    }

    /// Setting the width also sets the length.
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct SquareOld {
        width: f32,
        length: f32,
    }

    impl ResizableRectangle for SquareOld {
        fn set_width(&mut self, width: f32) {
            self.width = width;
            self.length = width;
        }

        fn set_length(&mut self, length: f32) {
            self.length = length;
        }

        fn area(&self) -> f32 {
            self.width * self.length
        }
    }

    #[derive(Debug, Default)]
    pub struct AreaCalculatorOld;

    impl AreaCalculatorOld {
        /// Expects 10.0 for every rectangle. A square answers 4.0.
        pub fn print_area(&self, rectangle: &mut dyn ResizableRectangle, console: &dyn Console) -> f32 {
            rectangle.set_length(5.0);
            rectangle.set_width(2.0);
            let area = rectangle.area();
            console.emit(&format!("{:?}", area));
            area
        }
    }
}

// ============================================================================
// PRODUCT DISCOUNT
// ============================================================================

pub trait Discounted {
    fn discount(&self) -> f64;
}

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    base_discount: f64,
}

impl Product {
    pub fn new(base_discount: f64) -> Self {
        Self { base_discount }
    }
}

impl Default for Product {
    fn default() -> Self {
        Self::new(BASE_DISCOUNT)
    }
}

impl Discounted for Product {
    fn discount(&self) -> f64 {
        self.base_discount
    }
}

/// Applies its extra discount itself, every time, without mutation.
#[derive(Debug, Clone, PartialEq)]
pub struct InHouseProduct {
    base_discount: f64,
}

impl InHouseProduct {
    pub fn new(base_discount: f64) -> Self {
        Self { base_discount }
    }
}

impl Default for InHouseProduct {
    fn default() -> Self {
        Self::new(BASE_DISCOUNT)
    }
}

impl Discounted for InHouseProduct {
    fn discount(&self) -> f64 {
        self.base_discount * IN_HOUSE_MULTIPLIER
    }
}

pub struct ProductUtils {
    products: Vec<Box<dyn Discounted>>,
}

impl ProductUtils {
    pub fn new(products: Vec<Box<dyn Discounted>>) -> Self {
        Self { products }
    }

    pub fn print_discounts(&self, console: &dyn Console) -> Vec<f64> {
        self.products
            .iter()
            .map(|product| {
                let discount = product.discount();
                console.emit(&format!("{:?}", discount));
                discount
            })
            .collect()
    }
}

impl Default for ProductUtils {
    fn default() -> Self {
        let products: Vec<Box<dyn Discounted>> =
            vec![Box::new(Product::default()), Box::new(InHouseProduct::default())];
        Self::new(products)
    }
}

// ============================================================================
// POLYGON
// ============================================================================

pub trait Polygon {
    fn area(&self) -> f32;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    width: f32,
    length: f32,
}

impl Rectangle {
    pub fn new(width: f32, length: f32) -> Self {
        Self { width, length }
    }
}

impl Polygon for Rectangle {
    fn area(&self) -> f32 {
        self.width * self.length
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Square {
    side: f32,
}

impl Square {
    pub fn new(side: f32) -> Self {
        Self { side }
    }
}

impl Polygon for Square {
    fn area(&self) -> f32 {
        self.side.powi(2)
    }
}

#[derive(Debug, Default)]
pub struct AreaCalculator;

impl AreaCalculator {
    pub fn print_area(&self, polygon: &dyn Polygon, console: &dyn Console) -> f32 {
        let area = polygon.area();
        console.emit(&format!("{:?}", area));
        area
    }
}

// ============================================================================
// EXAMPLES
// ============================================================================

pub struct ProductDiscountExample;

impl Example for ProductDiscountExample {
    fn id(&self) -> &'static str {
        "lsp.discount"
    }

    fn principle(&self) -> Principle {
        Principle::Lsp
    }

    fn title(&self) -> &'static str {
        "Product Discount Example"
    }

    fn run(&self, variant: Variant, _ctx: &ExecutionContext, console: &dyn Console) {
        match variant {
            Variant::Legacy => {
                legacy::ProductUtilsOld::new().print_discounts(console);
            }
            Variant::Refactored => {
                ProductUtils::default().print_discounts(console);
            }
        }
    }
}

pub struct PolygonExample;

impl Example for PolygonExample {
    fn id(&self) -> &'static str {
        "lsp.polygon"
    }

    fn principle(&self) -> Principle {
        Principle::Lsp
    }

    fn title(&self) -> &'static str {
        "Polygon Example"
    }

    fn run(&self, variant: Variant, _ctx: &ExecutionContext, console: &dyn Console) {
        match variant {
            Variant::Legacy => {
                let calculator = legacy::AreaCalculatorOld;
                let mut rectangle = legacy::RectangleOld::default();
                let mut square = legacy::SquareOld::default();
                calculator.print_area(&mut rectangle, console);
                calculator.print_area(&mut square, console);
            }
            Variant::Refactored => {
                let calculator = AreaCalculator;
                calculator.print_area(&Rectangle::new(2.0, 5.0), console);
                calculator.print_area(&Square::new(2.0), console);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::legacy::ResizableRectangle;
    use solid_core::Transcript;

    #[test]
    fn test_product_discounts() {
        assert_eq!(Product::default().discount(), 20.0);
        assert_eq!(InHouseProduct::default().discount(), 30.0);
    }

    #[test]
    fn test_in_house_discount_is_stable_across_calls() {
        let product = InHouseProduct::default();
        assert_eq!(product.discount(), product.discount());
    }

    #[test]
    fn test_product_utils_needs_no_special_case() {
        let transcript = Transcript::new();
        let discounts = ProductUtils::default().print_discounts(&transcript);

        assert_eq!(discounts, vec![20.0, 30.0]);
        assert_eq!(transcript.lines(), vec!["20.0", "30.0"]);
    }

    #[test]
    fn test_legacy_product_utils_matches_output_but_compounds() {
        let transcript = Transcript::new();
        let mut utils = legacy::ProductUtilsOld::new();

        assert_eq!(utils.print_discounts(&transcript), vec![20.0, 30.0]);
        // A second pass mutates the in-house product again.
        assert_eq!(utils.print_discounts(&transcript), vec![20.0, 45.0]);
    }

    #[test]
    fn test_legacy_square_surprises_the_caller() {
        let calculator = legacy::AreaCalculatorOld;
        let transcript = Transcript::new();

        let rectangle_area = calculator.print_area(&mut legacy::RectangleOld::default(), &transcript);
        let square_area = calculator.print_area(&mut legacy::SquareOld::default(), &transcript);

        assert_eq!(rectangle_area, 10.0);
        assert_eq!(square_area, 4.0);
        assert_ne!(rectangle_area, square_area);
    }

    #[test]
    fn test_legacy_square_keeps_sides_equal() {
        let mut square = legacy::SquareOld::default();
        square.set_width(3.0);
        assert_eq!(square.area(), 9.0);
    }

    #[test]
    fn test_polygons_substitute_cleanly() {
        let calculator = AreaCalculator;
        let transcript = Transcript::new();
        let polygons: Vec<Box<dyn Polygon>> = vec![
            Box::new(Rectangle::new(2.0, 5.0)),
            Box::new(Square::new(2.0)),
        ];

        let areas: Vec<f32> = polygons
            .iter()
            .map(|p| calculator.print_area(p.as_ref(), &transcript))
            .collect();

        assert_eq!(areas, vec![10.0, 4.0]);
        assert_eq!(transcript.lines(), vec!["10.0", "4.0"]);
    }

    #[test]
    fn test_polygon_example_variants() {
        let ctx = ExecutionContext::new();
        let legacy = Transcript::new();
        let refactored = Transcript::new();

        PolygonExample.run(Variant::Legacy, &ctx, &legacy);
        PolygonExample.run(Variant::Refactored, &ctx, &refactored);

        assert_eq!(legacy.lines(), vec!["10.0", "4.0"]);
        assert_eq!(refactored.lines(), vec!["10.0", "4.0"]);
    }
}

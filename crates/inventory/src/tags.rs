use stockdesk_format::{Badge, TagTable};

/// Stock category.
pub const CATEGORY: TagTable = TagTable::new(
    "category",
    &[
        ("electronics", Badge { label: "Electronics", color_class: "bg-blue-100 text-blue-800" }),
        ("furniture", Badge { label: "Furniture", color_class: "bg-amber-100 text-amber-800" }),
        ("stationery", Badge { label: "Stationery", color_class: "bg-green-100 text-green-800" }),
        ("equipment", Badge { label: "Equipment", color_class: "bg-purple-100 text-purple-800" }),
    ],
);

/// Physical condition of stock.
pub const CONDITION: TagTable = TagTable::new(
    "condition",
    &[
        ("good", Badge { label: "Good", color_class: "bg-green-100 text-green-800" }),
        ("average", Badge { label: "Average", color_class: "bg-yellow-100 text-yellow-800" }),
        (
            "needs-maintenance",
            Badge { label: "Needs Maintenance", color_class: "bg-orange-100 text-orange-800" },
        ),
        ("needs-repair", Badge { label: "Needs Repair", color_class: "bg-red-100 text-red-800" }),
    ],
);

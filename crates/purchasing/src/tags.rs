use stockdesk_format::{Badge, TagTable};

/// Category of a purchase item (title-cased tags).
pub const ITEM_CATEGORY: TagTable = TagTable::new(
    "item category",
    &[
        ("Equipment", Badge { label: "Equipment", color_class: "bg-purple-100 text-purple-800" }),
        ("Furniture", Badge { label: "Furniture", color_class: "bg-amber-100 text-amber-800" }),
        ("Supplies", Badge { label: "Supplies", color_class: "bg-green-100 text-green-800" }),
        ("Software", Badge { label: "Software", color_class: "bg-blue-100 text-blue-800" }),
    ],
);

/// Category of a purchase request.
pub const REQUEST_CATEGORY: TagTable = TagTable::new(
    "request category",
    &[
        ("equipment", Badge { label: "Equipment", color_class: "bg-purple-100 text-purple-800" }),
        ("supplies", Badge { label: "Supplies", color_class: "bg-green-100 text-green-800" }),
        ("furniture", Badge { label: "Furniture", color_class: "bg-amber-100 text-amber-800" }),
        ("services", Badge { label: "Services", color_class: "bg-sky-100 text-sky-800" }),
    ],
);

pub const PRIORITY: TagTable = TagTable::new(
    "priority",
    &[
        ("high", Badge { label: "High", color_class: "bg-red-100 text-red-800" }),
        ("medium", Badge { label: "Medium", color_class: "bg-yellow-100 text-yellow-800" }),
        ("low", Badge { label: "Low", color_class: "bg-green-100 text-green-800" }),
    ],
);

pub const DEPARTMENT: TagTable = TagTable::new(
    "department",
    &[
        ("cs", Badge { label: "Computer Science", color_class: "bg-blue-100 text-blue-800" }),
        ("physics", Badge { label: "Physics", color_class: "bg-indigo-100 text-indigo-800" }),
        ("chemistry", Badge { label: "Chemistry", color_class: "bg-teal-100 text-teal-800" }),
        ("admin", Badge { label: "Administration", color_class: "bg-gray-100 text-gray-800" }),
    ],
);

/// Purchase order lifecycle.
pub const ORDER_STATUS: TagTable = TagTable::new(
    "order status",
    &[
        ("draft", Badge { label: "Draft", color_class: "bg-gray-100 text-gray-800" }),
        ("approved", Badge { label: "Approved", color_class: "bg-blue-100 text-blue-800" }),
        ("received", Badge { label: "Received", color_class: "bg-green-100 text-green-800" }),
        ("closed", Badge { label: "Closed", color_class: "bg-slate-100 text-slate-800" }),
    ],
);

pub const PENDING: Badge = Badge { label: "Pending", color_class: "bg-yellow-100 text-yellow-800" };
pub const RECEIVED: Badge = Badge { label: "Received", color_class: "bg-green-100 text-green-800" };

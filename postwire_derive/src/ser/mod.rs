pub(crate) mod enum_impl;
pub(crate) mod struct_impl;

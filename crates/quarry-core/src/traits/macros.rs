// impl_field_value
macro_rules! impl_field_value {
    ( $( $type:ty => $variant:ident ),* $(,)? ) => {
        $(
            impl FieldValue for $type {
                fn to_value(&self) -> Value {
                    Value::$variant((*self).into())
                }
            }

            impl FieldType for $type {}
        )*
    };
}

// impl_capability
macro_rules! impl_capability {
    ( $capability:ident : $( $type:ty ),* $(,)? ) => {
        $(
            impl $capability for $type {}
        )*
    };
}

// impl_range_containable
macro_rules! impl_range_containable {
    ( $( $type:ty ),* $(,)? ) => {
        $(
            impl RangeContainable for $type {
                type Bound = Self;
            }
        )*
    };
}

// NOTE:
// Both datasets are maintained externally and only read.
// Only the columns that are actually needed are declared.

///////////////////////////////////////////////////////////////////////
// EPC addresses
///////////////////////////////////////////////////////////////////////

table! {
    epc_addresses (rowid) {
        rowid -> BigInt,
        postcode -> Nullable<Text>,
        address1 -> Nullable<Text>,
        address2 -> Nullable<Text>,
        address3 -> Nullable<Text>,
        address -> Nullable<Text>,
        // Stored as text, might not be numeric
        uprn -> Nullable<Text>,
    }
}

///////////////////////////////////////////////////////////////////////
// OS Open UPRN
///////////////////////////////////////////////////////////////////////

table! {
    uprns (uprn) {
        #[sql_name = "UPRN"]
        uprn -> BigInt,
        #[sql_name = "X_COORDINATE"]
        x_coordinate -> Nullable<Double>,
        #[sql_name = "Y_COORDINATE"]
        y_coordinate -> Nullable<Double>,
        #[sql_name = "LATITUDE"]
        latitude -> Nullable<Double>,
        #[sql_name = "LONGITUDE"]
        longitude -> Nullable<Double>,
    }
}

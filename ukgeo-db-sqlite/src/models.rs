use diesel::sql_types::Text;

#[derive(Queryable)]
pub struct EpcAddress {
    pub uprn: Option<String>,
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub address3: Option<String>,
    pub address: Option<String>,
}

#[derive(Queryable)]
pub struct UprnCoordinate {
    pub uprn: i64,
    pub x_coordinate: Option<f64>,
    pub y_coordinate: Option<f64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

#[derive(QueryableByName)]
pub struct TableName {
    #[diesel(sql_type = Text)]
    pub name: String,
}

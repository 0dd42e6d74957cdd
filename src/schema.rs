table! {
    appointments (aid) {
        aid -> Char,
        patient_uid -> Char,
        did -> Char,
        appointment_date -> Date,
        appointment_time -> Time,
        consult_type -> Char,
        status -> Char,
        location -> Nullable<Varchar>,
        notes -> Nullable<Varchar>,
        created_at -> Datetime,
    }
}

table! {
    doctor_availability (id) {
        id -> Unsigned<Bigint>,
        did -> Char,
        day_of_week -> Integer,
        start_time -> Time,
        end_time -> Time,
        is_available -> Bool,
    }
}

table! {
    doctors (did) {
        did -> Char,
        uid -> Char,
        specialty -> Varchar,
        bio -> Nullable<Varchar>,
        location -> Nullable<Varchar>,
        years_experience -> Nullable<Integer>,
        consultation_fee -> Integer,
        avatar_url -> Nullable<Varchar>,
        rating -> Double,
        review_count -> Integer,
        offers_video -> Bool,
    }
}

table! {
    logins (token, uid, login_time) {
        token -> Char,
        uid -> Char,
        login_time -> Datetime,
    }
}

table! {
    profiles (uid) {
        uid -> Char,
        display_name -> Varchar,
        email -> Varchar,
        phone -> Nullable<Varchar>,
        role -> Nullable<Char>,
    }
}

table! {
    users (uid) {
        uid -> Char,
        email -> Varchar,
        password -> Char,
        role -> Char,
        created_at -> Datetime,
    }
}

allow_tables_to_appear_in_same_query!(
    appointments,
    doctor_availability,
    doctors,
    logins,
    profiles,
    users,
);

//! Built-in component sets used when no manifest is present.

/// Admin component names, in generation order. Each is capitalized before use.
pub const ADMIN_COMPONENTS: [&str; 11] = [
    "dashboard",
    "inbox",
    "users",
    "productmanagement",
    "jobs",
    "services",
    "settings",
    "faq",
    "about",
    "logout",
    "signup",
];

/// Template for admin components. `name` is the capitalized component name.
pub const ADMIN_TEMPLATE: &str = r#"import React from 'react';

const {{ name }} = () => {
    return (
        <div>
            <h1>{{ name }}</h1>
            <p>This is the {{ name }} page.</p>
        </div>
    );
};

export default {{ name }};"#;

/// Public pages as (file name, verbatim content), in generation order.
pub const PUBLIC_PAGES: [(&str, &str); 6] = [
    (
        "Home.js",
        r#"import React from 'react';

const Home = () => {
    return (
        <div>
            <h1>Welcome to PSEVEN</h1>
            <p>Find jobs, hire services and buy or sell in one place.</p>
        </div>
    );
};

export default Home;
"#,
    ),
    (
        "JobEmployers.js",
        r#"import React from 'react';

const JobEmployers = () => {
    return (
        <div>
            <h1>Jobs &amp; Employers</h1>
            <p>Browse open positions or post a vacancy for your company.</p>
        </div>
    );
};

export default JobEmployers;
"#,
    ),
    (
        "BuySell.js",
        r#"import React from 'react';

const BuySell = () => {
    return (
        <div>
            <h1>Buy &amp; Sell</h1>
            <p>List your products or shop from sellers across PSEVEN.</p>
        </div>
    );
};

export default BuySell;
"#,
    ),
    (
        "Services.js",
        r#"import React from 'react';

const Services = () => {
    return (
        <div>
            <h1>Services</h1>
            <p>Discover professional services offered by the PSEVEN community.</p>
        </div>
    );
};

export default Services;
"#,
    ),
    (
        "AboutUs.js",
        r#"import React from 'react';

const AboutUs = () => {
    return (
        <div>
            <h1>About Us</h1>
            <p>PSEVEN connects people with jobs, services and marketplaces.</p>
        </div>
    );
};

export default AboutUs;
"#,
    ),
    (
        "ContactUs.js",
        r#"import React from 'react';

const ContactUs = () => {
    return (
        <div>
            <h1>Contact Us</h1>
            <p>Have a question? Reach out to the PSEVEN team.</p>
        </div>
    );
};

export default ContactUs;
"#,
    ),
];

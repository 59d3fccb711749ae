//! Title keyword triggers.
//!
//! Each keyword is matched as a substring of the lower-cased occupation title.
//! Keywords must stay lower-case. Order matters only for keywords of equal
//! length, where the earlier entry wins.

/// `(keyword, target code, target title)`
pub(crate) const KEYWORD_RULES: &[(&str, &str, &str)] = &[
    // Legal
    ("judge", "23-1023.00", "Judges, Magistrate Judges, and Magistrates"),
    ("justice", "23-1023.00", "Judges, Magistrate Judges, and Magistrates"),
    ("magistrate", "23-1023.00", "Judges, Magistrate Judges, and Magistrates"),
    ("tribunal", "23-1023.00", "Judges, Magistrate Judges, and Magistrates"),
    ("lawyer", "23-1011.00", "Lawyers"),
    ("advocate", "23-1011.00", "Lawyers"),
    ("attorney", "23-1011.00", "Lawyers"),
    ("solicitor", "23-1011.00", "Lawyers"),
    ("barrister", "23-1011.00", "Lawyers"),
    ("paralegal", "23-2011.00", "Paralegals and Legal Assistants"),

    // Government and administration
    ("elected official", "11-1031.00", "Legislators"),
    ("legislator", "11-1031.00", "Legislators"),
    ("diplomat", "11-1011.00", "Chief Executives"),
    ("administrative official", "11-1011.00", "Chief Executives"),
    ("executive official", "11-1011.00", "Chief Executives"),
    ("government official", "11-1011.00", "Chief Executives"),
    ("chief executive", "11-1011.00", "Chief Executives"),
    ("chairman", "11-1011.00", "Chief Executives"),
    ("registrar", "11-9033.00", "Education Administrators, Postsecondary"),
    ("treasurer", "11-3031.00", "Financial Managers"),
    ("controller", "11-3031.00", "Financial Managers"),

    // Education
    ("professor", "25-1099.00", "Postsecondary Teachers, All Other"),
    ("lecturer", "25-1099.00", "Postsecondary Teachers, All Other"),
    ("university", "25-1099.00", "Postsecondary Teachers, All Other"),
    ("college teacher", "25-1099.00", "Postsecondary Teachers, All Other"),
    ("principal, college", "11-9033.00", "Education Administrators, Postsecondary"),
    ("principal", "11-9032.00", "Education Administrators, Kindergarten through Secondary"),
    ("headmaster", "11-9032.00", "Education Administrators, Kindergarten through Secondary"),
    ("school inspector", "11-9032.00", "Education Administrators, Kindergarten through Secondary"),
    ("education officer", "11-9032.00", "Education Administrators, Kindergarten through Secondary"),

    // Health
    ("physician", "29-1216.00", "General Internal Medicine Physicians"),
    ("doctor", "29-1216.00", "General Internal Medicine Physicians"),
    ("surgeon", "29-1248.00", "Surgeons, All Other"),
    ("nursing", "29-1141.00", "Registered Nurses"),
    ("nurse,", "29-1141.00", "Registered Nurses"),
    ("nurses", "29-1141.00", "Registered Nurses"),
    ("dentist", "29-1021.00", "Dentists, General"),
    ("pharmacist", "29-1051.00", "Pharmacists"),
    ("veterinarian", "29-1131.00", "Veterinarians"),
    ("optometrist", "29-1041.00", "Optometrists"),
    ("physiotherapist", "29-1123.00", "Physical Therapists"),
    ("therapist", "29-1125.00", "Recreational Therapists"),
    ("paramedic", "29-2043.00", "Paramedics"),
    ("midwife", "29-9099.01", "Midwives"),
    ("ayurveda", "29-1291.00", "Acupuncturists"),
    ("homeopath", "29-1291.00", "Acupuncturists"),
    ("unani", "29-1291.00", "Acupuncturists"),

    // Life sciences
    ("biologist", "19-1029.04", "Biologists"),
    ("botanist", "19-1029.04", "Biologists"),
    ("zoologist", "19-1023.00", "Zoologists and Wildlife Biologists"),
    ("mycologist", "19-1029.04", "Biologists"),
    ("algologist", "19-1029.04", "Biologists"),
    ("microbiologist", "19-1022.00", "Microbiologists"),
    ("geneticist", "19-1029.03", "Geneticists"),
    ("ecologist", "19-2041.03", "Industrial Ecologists"),
    ("silviculturist", "19-1029.04", "Biologists"),
    ("pisciculturist", "19-1029.04", "Biologists"),
    ("entomologist", "19-1029.04", "Biologists"),
    ("ornithologist", "19-1023.00", "Zoologists and Wildlife Biologists"),
    ("sericulturist", "19-1029.04", "Biologists"),
    ("horticulturist", "19-1013.00", "Soil and Plant Scientists"),
    ("agronomist", "19-1013.00", "Soil and Plant Scientists"),

    // Physical and mathematical sciences
    ("physicist", "19-2012.00", "Physicists"),
    ("astronomer", "19-2011.00", "Astronomers"),
    ("chemist", "19-2031.00", "Chemists"),
    ("geologist", "19-2042.00", "Geoscientists, Except Hydrologists and Geographers"),
    ("hydrologist", "19-2043.00", "Hydrologists"),
    ("hydrographer", "19-2042.00", "Geoscientists, Except Hydrologists and Geographers"),
    ("meteorologist", "19-2021.00", "Atmospheric and Space Scientists"),
    ("oceanographer", "19-2042.00", "Geoscientists, Except Hydrologists and Geographers"),
    ("seismologist", "19-2042.00", "Geoscientists, Except Hydrologists and Geographers"),
    ("mathematician", "15-2021.00", "Mathematicians"),
    ("statistician", "15-2041.00", "Statisticians"),
    ("actuary", "15-2011.00", "Actuaries"),

    // Social sciences
    ("economist", "19-3011.00", "Economists"),
    ("sociologist", "19-3041.00", "Sociologists"),
    ("psychologist", "19-3031.00", "Psychologists, All Other"),
    ("anthropologist", "19-3091.00", "Anthropologists and Archeologists"),
    ("archaeologist", "19-3091.00", "Anthropologists and Archeologists"),
    ("historian", "19-3093.00", "Historians"),
    ("geographer", "19-3092.00", "Geographers"),
    ("political scientist", "19-3094.00", "Political Scientists"),

    // Engineering
    ("engineer", "17-2199.00", "Engineers, All Other"),
    ("civil engineer", "17-2051.00", "Civil Engineers"),
    ("mechanical engineer", "17-2141.00", "Mechanical Engineers"),
    ("electrical engineer", "17-2071.00", "Electrical Engineers"),
    ("chemical engineer", "17-2041.00", "Chemical Engineers"),
    ("architect", "17-1011.00", "Architects, Except Landscape and Naval"),
    ("surveyor", "17-1022.00", "Surveyors"),

    // Technologists
    ("textile technologist", "17-2199.00", "Engineers, All Other"),
    ("sugar technologist", "19-1012.00", "Food Scientists and Technologists"),
    ("food technologist", "19-1012.00", "Food Scientists and Technologists"),
    ("dairy technologist", "19-1012.00", "Food Scientists and Technologists"),
    ("leather technologist", "17-2199.00", "Engineers, All Other"),

    // Agriculture
    ("farmer", "11-9013.00", "Farmers, Ranchers, and Other Agricultural Managers"),
    ("cultivator", "45-2092.00", "Farmworkers and Laborers, Crop, Nursery, and Greenhouse"),
    ("grower", "45-2092.00", "Farmworkers and Laborers, Crop, Nursery, and Greenhouse"),
    ("planter", "45-2092.00", "Farmworkers and Laborers, Crop, Nursery, and Greenhouse"),
    ("rubber nursery", "45-2092.00", "Farmworkers and Laborers, Crop, Nursery, and Greenhouse"),
    ("rubber plantation", "45-2092.00", "Farmworkers and Laborers, Crop, Nursery, and Greenhouse"),
    ("rubber tapper", "45-2092.00", "Farmworkers and Laborers, Crop, Nursery, and Greenhouse"),
    ("nursery worker", "45-2092.00", "Farmworkers and Laborers, Crop, Nursery, and Greenhouse"),
    ("nursery manager", "11-9013.00", "Farmers, Ranchers, and Other Agricultural Managers"),
    ("plantation manager", "11-9013.00", "Farmers, Ranchers, and Other Agricultural Managers"),
    ("gardener", "37-3011.00", "Landscaping and Groundskeeping Workers"),
    ("horticulture", "45-2092.00", "Farmworkers and Laborers, Crop, Nursery, and Greenhouse"),
    ("forester", "19-1032.00", "Foresters"),
    ("forest ranger", "19-1032.00", "Foresters"),

    // Transport
    ("pilot", "53-2011.00", "Airline Pilots, Copilots, and Flight Engineers"),
    ("captain", "53-5021.00", "Captains, Mates, and Pilots of Water Vessels"),
    ("driver", "53-3032.00", "Heavy and Tractor-Trailer Truck Drivers"),
    ("station master", "11-1021.00", "General and Operations Managers"),
    ("train", "53-4011.00", "Locomotive Engineers"),

    // Arts, media and heritage
    ("restorer", "25-4013.00", "Museum Technicians and Conservators"),
    ("conservator", "25-4013.00", "Museum Technicians and Conservators"),
    ("curator", "25-4012.00", "Curators"),
    ("librarian", "25-4022.00", "Librarians and Media Collections Specialists"),
    ("archivist", "25-4011.00", "Archivists"),
    ("musician", "27-2042.00", "Musicians and Singers"),
    ("singer", "27-2042.00", "Musicians and Singers"),
    ("actor", "27-2011.00", "Actors"),
    ("dancer", "27-2031.00", "Dancers"),
    ("choreographer", "27-2032.00", "Choreographers"),
    ("artist", "27-1013.00", "Fine Artists, Including Painters, Sculptors, and Illustrators"),
    ("painter", "27-1013.00", "Fine Artists, Including Painters, Sculptors, and Illustrators"),
    ("sculptor", "27-1013.00", "Fine Artists, Including Painters, Sculptors, and Illustrators"),
    ("photographer", "27-4021.00", "Photographers"),
    ("journalist", "27-3023.00", "News Analysts, Reporters, and Journalists"),
    ("reporter", "27-3023.00", "News Analysts, Reporters, and Journalists"),
    ("editor", "27-3041.00", "Editors"),
    ("writer", "27-3043.00", "Writers and Authors"),
    ("author", "27-3043.00", "Writers and Authors"),

    // Musical instruments
    ("instrument maker", "49-9063.00", "Musical Instrument Repairers and Tuners"),
    ("instrument tuner", "49-9063.00", "Musical Instrument Repairers and Tuners"),
    ("organ tuner", "49-9063.00", "Musical Instrument Repairers and Tuners"),
    ("piano tuner", "49-9063.00", "Musical Instrument Repairers and Tuners"),
    ("tabla maker", "49-9063.00", "Musical Instrument Repairers and Tuners"),
    ("sitar maker", "49-9063.00", "Musical Instrument Repairers and Tuners"),
    ("harmonium", "49-9063.00", "Musical Instrument Repairers and Tuners"),

    // Crafts and trades
    ("welder", "51-4121.00", "Welders, Cutters, Solderers, and Brazers"),
    ("blacksmith", "51-4199.00", "Metal Workers and Plastic Workers, All Other"),
    ("goldsmith", "51-9071.00", "Jewelers and Precious Stone and Metal Workers"),
    ("silversmith", "51-9071.00", "Jewelers and Precious Stone and Metal Workers"),
    ("jeweller", "51-9071.00", "Jewelers and Precious Stone and Metal Workers"),
    ("potter", "51-9195.05", "Potters, Manufacturing"),
    ("glass blower", "51-9195.04", "Glass Blowers, Molders, Benders, and Finishers"),
    ("baker", "51-3011.00", "Bakers"),
    ("butcher", "51-3021.00", "Butchers and Meat Cutters"),
    ("tailor", "51-6052.00", "Tailors, Dressmakers, and Custom Sewers"),
    ("carpenter", "47-2031.00", "Carpenters"),
    ("mason", "47-2021.00", "Brickmasons and Blockmasons"),
    ("plumber", "47-2152.00", "Plumbers, Pipefitters, and Steamfitters"),
    ("electrician", "47-2111.00", "Electricians"),

    // Plant and factory operation
    ("plant operator", "51-8099.00", "Plant and System Operators, All Other"),
    ("machine operator", "51-9199.00", "Production Workers, All Other"),
    ("factory", "51-9199.00", "Production Workers, All Other"),
    ("manufacturing", "51-9199.00", "Production Workers, All Other"),
    ("glass plant", "51-9195.04", "Glass Blowers, Molders, Benders, and Finishers"),
    ("ceramic plant", "51-9195.00", "Molders, Shapers, and Casters, Except Metal and Plastic"),

    // Food and personal service
    ("waiter", "35-3031.00", "Waiters and Waitresses"),
    ("cook", "35-2014.00", "Cooks, Restaurant"),
    ("chef", "35-1011.00", "Chefs and Head Cooks"),
    ("barber", "39-5011.00", "Barbers"),
    ("hairdresser", "39-5012.00", "Hairdressers, Hairstylists, and Cosmetologists"),
    ("beautician", "39-5012.00", "Hairdressers, Hairstylists, and Cosmetologists"),

    // Protective service
    ("police", "33-3051.00", "Police and Sheriff's Patrol Officers"),
    ("constable", "33-3051.00", "Police and Sheriff's Patrol Officers"),
    ("guard", "33-9032.00", "Security Guards"),
    ("watchman", "33-9032.00", "Security Guards"),
    ("security", "33-9032.00", "Security Guards"),
    ("firefighter", "33-2011.00", "Firefighters"),
    ("fireman", "33-2011.00", "Firefighters"),

    // Hospitality
    ("porter", "39-6011.00", "Baggage Porters and Bellhops"),
    ("bellhop", "39-6011.00", "Baggage Porters and Bellhops"),
    ("doorkeeper", "39-6011.00", "Baggage Porters and Bellhops"),
    ("concierge", "39-6012.00", "Concierges"),

    // Clerical and accounting
    ("clerk", "43-9061.00", "Office Clerks, General"),
    ("secretary", "43-6014.00", "Secretaries and Administrative Assistants, Except Legal, Medical, and Executive"),
    ("typist", "43-9022.00", "Word Processors and Typists"),
    ("receptionist", "43-4171.00", "Receptionists and Information Clerks"),
    ("cashier", "41-2011.00", "Cashiers"),
    ("accountant", "13-2011.00", "Accountants and Auditors"),
    ("auditor", "13-2011.00", "Accountants and Auditors"),

    // Mining
    ("miner", "47-5041.00", "Continuous Mining Machine Operators"),
    ("quarry", "47-5041.00", "Continuous Mining Machine Operators"),
    ("driller", "47-5012.00", "Rotary Drill Operators, Oil and Gas"),

    // Construction and moulding
    ("concrete", "47-2051.00", "Cement Masons and Concrete Finishers"),
    ("mould", "51-4071.00", "Foundry Mold and Coremakers"),
    ("moulder", "51-4071.00", "Foundry Mold and Coremakers"),
];
